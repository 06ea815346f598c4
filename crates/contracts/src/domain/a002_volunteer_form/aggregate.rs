use serde::{Deserialize, Serialize};

use super::validation::{validate_field, FormValidation};

/// Текст пункта-заглушки в списке областей интереса.
pub const INTEREST_PLACEHOLDER: &str = "Selecione a área";

pub const SUBMIT_LABEL: &str = "Quero ser voluntário";
pub const SUBMIT_THANKS_LABEL: &str = "Obrigado por se cadastrar!";

// ============================================================================
// Fields
// ============================================================================

/// Обязательные поля формы регистрации волонтёра
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    Name,
    Email,
    Interest,
}

impl FieldKey {
    /// HTML id of the input element.
    pub fn element_id(&self) -> &'static str {
        match self {
            FieldKey::Name => "nome",
            FieldKey::Email => "email",
            FieldKey::Interest => "interesse",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Name => "Nome completo",
            FieldKey::Email => "E-mail",
            FieldKey::Interest => "Área de interesse",
        }
    }

    /// Text of the `.validation-message` shown under an invalid field.
    pub fn validation_message(&self) -> &'static str {
        match self {
            FieldKey::Name => "Informe seu nome.",
            FieldKey::Email => "Informe um e-mail válido.",
            FieldKey::Interest => "Escolha uma área de interesse.",
        }
    }

    pub fn all() -> [FieldKey; 3] {
        [FieldKey::Name, FieldKey::Email, FieldKey::Interest]
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    Editable,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(FormValidation),
    AlreadySubmitted,
}

/// Форма регистрации волонтёра.
///
/// Lives only for one page view; nothing is sent anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerForm {
    pub name: String,
    pub email: String,
    pub interest: String,
    pub terms_accepted: bool,
    pub state: SubmissionState,
    #[serde(skip, default = "default_placeholder")]
    interest_placeholder: String,
}

fn default_placeholder() -> String {
    INTEREST_PLACEHOLDER.to_string()
}

impl Default for VolunteerForm {
    fn default() -> Self {
        Self::new(INTEREST_PLACEHOLDER)
    }
}

impl VolunteerForm {
    /// Пустая форма; область интереса стоит на заглушке.
    pub fn new(interest_placeholder: impl Into<String>) -> Self {
        let interest_placeholder = interest_placeholder.into();
        Self {
            name: String::new(),
            email: String::new(),
            interest: interest_placeholder.clone(),
            terms_accepted: false,
            state: SubmissionState::Editable,
            interest_placeholder,
        }
    }

    pub fn value(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Interest => &self.interest,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    /// Обновить значение поля. Ignored once the form is submitted.
    pub fn set_value(&mut self, key: FieldKey, value: String) {
        if self.is_locked() {
            return;
        }
        match key {
            FieldKey::Name => self.name = value,
            FieldKey::Email => self.email = value,
            FieldKey::Interest => self.interest = value,
        }
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        if self.is_locked() {
            return;
        }
        self.terms_accepted = accepted;
    }

    pub fn validate(&self) -> FormValidation {
        let placeholder = self.interest_placeholder.as_str();
        FormValidation {
            name: validate_field(FieldKey::Name, &self.name, placeholder),
            email: validate_field(FieldKey::Email, &self.email, placeholder),
            interest: validate_field(FieldKey::Interest, &self.interest, placeholder),
            terms_accepted: self.terms_accepted,
        }
    }

    /// Submit control is enabled only for a valid, still editable form.
    pub fn can_submit(&self) -> bool {
        !self.is_locked() && self.validate().is_valid()
    }

    /// Re-validate and, when valid, move to `Submitted` for good.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_locked() {
            return SubmitOutcome::AlreadySubmitted;
        }
        let validation = self.validate();
        if !validation.is_valid() {
            return SubmitOutcome::Rejected(validation);
        }
        self.state = SubmissionState::Submitted;
        SubmitOutcome::Accepted
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_locked() {
            SUBMIT_THANKS_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> VolunteerForm {
        let mut form = VolunteerForm::default();
        form.set_value(FieldKey::Name, "Ana".into());
        form.set_value(FieldKey::Email, "ana@example.com".into());
        form.set_value(FieldKey::Interest, "Education".into());
        form.set_terms_accepted(true);
        form
    }

    #[test]
    fn test_new_form_is_invalid() {
        let form = VolunteerForm::default();
        assert_eq!(form.interest, INTEREST_PLACEHOLDER);
        assert_eq!(form.validate().invalid_fields(), FieldKey::all().to_vec());
        assert!(!form.can_submit());
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_submit_gating_truth_table() {
        let names = ["", "  ", "Ana"];
        let emails = ["", "not-an-email", "ana@example.com"];
        let interests = ["", INTEREST_PLACEHOLDER, "Education"];

        for name in names {
            for email in emails {
                for interest in interests {
                    for terms in [false, true] {
                        let mut form = VolunteerForm::default();
                        form.set_value(FieldKey::Name, name.into());
                        form.set_value(FieldKey::Email, email.into());
                        form.set_value(FieldKey::Interest, interest.into());
                        form.set_terms_accepted(terms);

                        let expected = name == "Ana"
                            && email == "ana@example.com"
                            && interest == "Education"
                            && terms;
                        assert_eq!(
                            form.can_submit(),
                            expected,
                            "name={name:?} email={email:?} interest={interest:?} terms={terms}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut form = filled();
        form.set_value(FieldKey::Email, "not-an-email".into());
        assert_eq!(form.validate(), form.validate());
    }

    #[test]
    fn test_successful_submit_locks_form() {
        let mut form = filled();
        assert!(form.can_submit());
        assert_eq!(form.submit(), SubmitOutcome::Accepted);
        assert!(form.is_locked());
        assert!(!form.can_submit());
        assert_eq!(form.submit_label(), SUBMIT_THANKS_LABEL);

        form.set_value(FieldKey::Name, "Bia".into());
        form.set_terms_accepted(false);
        assert_eq!(form.name, "Ana");
        assert!(form.terms_accepted);

        assert_eq!(form.submit(), SubmitOutcome::AlreadySubmitted);
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut form = filled();
        form.set_value(FieldKey::Email, "not-an-email".into());
        assert!(!form.can_submit());

        match form.submit() {
            SubmitOutcome::Rejected(v) => {
                assert_eq!(v.invalid_fields(), vec![FieldKey::Email]);
                assert!(v.terms_accepted);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(form.state, SubmissionState::Editable);
    }

    #[test]
    fn test_checking_terms_enables_submit() {
        let mut form = filled();
        form.set_terms_accepted(false);
        assert!(!form.can_submit());
        assert!(form.validate().invalid_fields().is_empty());

        form.set_terms_accepted(true);
        assert!(form.can_submit());
    }

    #[test]
    fn test_placeholder_interest_blocks_everything_else_valid() {
        let mut form = filled();
        form.set_value(FieldKey::Interest, INTEREST_PLACEHOLDER.into());
        assert!(!form.validate().interest);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_custom_placeholder() {
        let mut form = VolunteerForm::new("Escolha...");
        assert_eq!(form.interest, "Escolha...");
        form.set_value(FieldKey::Interest, INTEREST_PLACEHOLDER.into());
        assert!(form.validate().interest);
    }
}
