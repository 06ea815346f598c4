use crate::shared::notices::NoticeService;
use contracts::domain::a002_volunteer_form::{
    FieldKey, FormValidation, NoticeKind, SubmitOutcome, VolunteerForm,
};
use contracts::shared::config::BehaviorConfig;
use leptos::prelude::*;
use uuid::Uuid;

/// Everything the registration handlers need, built once when the form is
/// mounted.
#[derive(Clone, Copy)]
pub struct RegistrationContext {
    pub form: RwSignal<VolunteerForm>,
    pub validation: Memo<FormValidation>,
    pub can_submit: Memo<bool>,
    pub locked: Memo<bool>,
    pub notices: NoticeService,
    success_notice_ms: u32,
    error_notice_ms: u32,
}

impl RegistrationContext {
    pub fn new(config: &BehaviorConfig) -> Self {
        let form = RwSignal::new(VolunteerForm::new(config.interest_placeholder.clone()));
        Self {
            form,
            validation: Memo::new(move |_| form.with(|f| f.validate())),
            can_submit: Memo::new(move |_| form.with(|f| f.can_submit())),
            locked: Memo::new(move |_| form.with(|f| f.is_locked())),
            notices: NoticeService::new(),
            success_notice_ms: config.success_notice_ms,
            error_notice_ms: config.error_notice_ms,
        }
    }

    pub fn value(&self, key: FieldKey) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.value(key).to_string()))
    }

    pub fn field_invalid(&self, key: FieldKey) -> Signal<bool> {
        let validation = self.validation;
        Signal::derive(move || !validation.get().field(key))
    }

    pub fn set_field(&self, key: FieldKey, value: String) {
        self.form.update(|f| f.set_value(key, value));
    }

    pub fn set_terms_accepted(&self, accepted: bool) {
        self.form.update(|f| f.set_terms_accepted(accepted));
    }

    /// Simulated submission; nothing leaves the page.
    pub fn submit(&self) {
        if let Some((id, lifetime_ms)) = self.record_submit() {
            self.notices.dismiss_after(id, lifetime_ms);
        }
    }

    /// Apply a submit to the form and the notice list. Returns the new notice
    /// and how long it stays, or `None` when nothing was shown.
    pub(crate) fn record_submit(&self) -> Option<(Uuid, u32)> {
        let outcome = self.form.try_update(|f| f.submit())?;
        match outcome {
            SubmitOutcome::Accepted => {
                self.notices.clear();
                let id = self.notices.push(NoticeKind::Success);
                log::info!("volunteer registration submitted");
                Some((id, self.success_notice_ms))
            }
            SubmitOutcome::Rejected(validation) => {
                self.notices.clear();
                let id = self.notices.push(NoticeKind::Danger);
                log::info!(
                    "volunteer registration rejected: invalid={:?} terms_accepted={}",
                    validation.invalid_fields(),
                    validation.terms_accepted
                );
                Some((id, self.error_notice_ms))
            }
            SubmitOutcome::AlreadySubmitted => {
                log::debug!("submit ignored, form already submitted");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(ctx: &RegistrationContext) {
        ctx.set_field(FieldKey::Name, "Ana".into());
        ctx.set_field(FieldKey::Email, "ana@example.com".into());
        ctx.set_field(FieldKey::Interest, "Education".into());
        ctx.set_terms_accepted(true);
    }

    fn shown(ctx: &RegistrationContext) -> Vec<NoticeKind> {
        ctx.notices.current().into_iter().map(|n| n.kind).collect()
    }

    #[test]
    fn test_fresh_form_is_blocked() {
        Owner::new().with(|| {
            let ctx = RegistrationContext::new(&BehaviorConfig::default());
            assert!(!ctx.can_submit.get_untracked());
            assert!(!ctx.locked.get_untracked());
            assert!(!ctx.validation.get_untracked().terms_accepted);
        });
    }

    #[test]
    fn test_accepted_submit_replaces_notices_and_locks() {
        Owner::new().with(|| {
            let ctx = RegistrationContext::new(&BehaviorConfig::default());
            let old = ctx.notices.push(NoticeKind::Danger);
            fill(&ctx);
            assert!(ctx.can_submit.get_untracked());

            let (id, lifetime_ms) = ctx.record_submit().expect("notice shown");
            assert_ne!(id, old);
            assert_eq!(lifetime_ms, 10_000);
            assert_eq!(shown(&ctx), vec![NoticeKind::Success]);
            assert!(ctx.locked.get_untracked());
            assert!(!ctx.can_submit.get_untracked());
            assert_eq!(
                ctx.form.with_untracked(|f| f.submit_label()),
                "Obrigado por se cadastrar!"
            );
        });
    }

    #[test]
    fn test_rejected_submit_shows_danger_notice() {
        Owner::new().with(|| {
            let ctx = RegistrationContext::new(&BehaviorConfig::default());
            fill(&ctx);
            ctx.set_field(FieldKey::Email, "not-an-email".into());
            ctx.notices.push(NoticeKind::Danger);

            let (_, lifetime_ms) = ctx.record_submit().expect("notice shown");
            assert_eq!(lifetime_ms, 5_000);
            assert_eq!(shown(&ctx), vec![NoticeKind::Danger]);
            assert!(!ctx.locked.get_untracked());
            assert!(ctx.field_invalid(FieldKey::Email).get_untracked());
        });
    }

    #[test]
    fn test_second_submit_keeps_notices() {
        Owner::new().with(|| {
            let ctx = RegistrationContext::new(&BehaviorConfig::default());
            fill(&ctx);
            let (id, _) = ctx.record_submit().expect("notice shown");

            assert_eq!(ctx.record_submit(), None);
            let ids: Vec<Uuid> = ctx.notices.current().into_iter().map(|n| n.id).collect();
            assert_eq!(ids, vec![id]);
        });
    }

    #[test]
    fn test_edits_ignored_after_submit() {
        Owner::new().with(|| {
            let ctx = RegistrationContext::new(&BehaviorConfig::default());
            fill(&ctx);
            ctx.record_submit();

            ctx.set_field(FieldKey::Name, String::new());
            ctx.set_terms_accepted(false);
            assert_eq!(ctx.value(FieldKey::Name).get_untracked(), "Ana");
            assert!(ctx.validation.get_untracked().terms_accepted);
        });
    }

    #[test]
    fn test_config_timings_are_used() {
        Owner::new().with(|| {
            let config = BehaviorConfig {
                error_notice_ms: 1_500,
                ..BehaviorConfig::default()
            };
            let ctx = RegistrationContext::new(&config);
            assert_eq!(ctx.record_submit().map(|(_, ms)| ms), Some(1_500));
        });
    }
}
