use contracts::domain::a002_volunteer_form::{Notice, NoticeKind};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

/// Transient alerts shown at the top of a container.
///
/// Each notice removes itself after its lifetime; removal of a notice that is
/// already gone (cleared by a newer submit, or the owner unmounted) does
/// nothing.
#[derive(Clone, Copy)]
pub struct NoticeService {
    notices: RwSignal<Vec<Notice>>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
        }
    }

    pub fn current(&self) -> Vec<Notice> {
        self.notices.get()
    }

    pub fn clear(&self) {
        self.notices.set(Vec::new());
    }

    /// Show a notice on top of the others and schedule its removal.
    pub fn show(&self, kind: NoticeKind, lifetime_ms: u32) -> Uuid {
        let id = self.push(kind);
        self.dismiss_after(id, lifetime_ms);
        id
    }

    /// Insert a notice on top without scheduling its removal.
    pub fn push(&self, kind: NoticeKind) -> Uuid {
        let notice = Notice::new(kind);
        let id = notice.id;
        self.notices.update(|list| list.insert(0, notice));
        id
    }

    pub fn dismiss_after(&self, id: Uuid, lifetime_ms: u32) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(lifetime_ms).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        // try_update: the signal may be disposed by the time the timer fires
        let _ = self
            .notices
            .try_update(|list| list.retain(|notice| notice.id != id));
    }
}

#[component]
pub fn NoticeHost(service: NoticeService) -> impl IntoView {
    view! {
        <For
            each=move || service.current()
            key=|notice| notice.id
            children=move |notice: Notice| {
                let kind = notice.kind;
                view! {
                    <div class=kind.class() role="alert">
                        <span>{kind.glyph()}</span>
                        " "
                        <strong>{kind.headline()}</strong>
                        " "
                        {kind.message()}
                    </div>
                }
            }
        />
    }
}
