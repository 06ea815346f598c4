use super::validity::with_invalid;
use leptos::prelude::*;

/// Checkbox inside a `.checkbox-group`; the invalid marker goes on the group.
#[component]
pub fn Checkbox(
    /// ID for the checkbox element
    id: &'static str,
    /// Label text
    label: &'static str,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Whether the group is shown as invalid
    #[prop(into)]
    invalid: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class=move || with_invalid("checkbox-group", invalid.get())>
            <input
                id=id
                name=id
                type="checkbox"
                class="form-checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get().unwrap_or(false)
                required=true
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form-checkbox-label" for=id>
                {label}
            </label>
        </div>
    }
}
