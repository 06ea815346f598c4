use super::validity::{aria_invalid, message_display, with_invalid};
use leptos::prelude::*;

/// Required select inside a `.form-field` wrapper.
///
/// The first option is the placeholder; its text doubles as its value.
#[component]
pub fn Select(
    /// ID for the select element
    id: &'static str,
    /// Label text
    label: &'static str,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Placeholder option text
    #[prop(into)]
    placeholder: String,
    /// Options (value and label are the same text)
    options: Vec<&'static str>,
    /// Whether the current value fails validation
    #[prop(into)]
    invalid: Signal<bool>,
    /// Message revealed while the value is invalid
    message: &'static str,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let emit = move |ev: leptos::ev::Event| {
        if let Some(handler) = on_change {
            handler.run(event_target_value(&ev));
        }
    };

    let placeholder_value = placeholder.clone();
    let placeholder_selected = move || value.get() == placeholder_value;

    view! {
        <div class="form-field">
            <label class="form-label" for=id>
                {label}
            </label>
            <select
                id=id
                name=id
                class=move || with_invalid("form-select", invalid.get())
                aria-invalid=move || aria_invalid(invalid.get())
                disabled=move || disabled.get().unwrap_or(false)
                required=true
                on:input=emit
                on:change=emit
            >
                <option value=placeholder.clone() selected=placeholder_selected>
                    {placeholder.clone()}
                </option>
                {options
                    .into_iter()
                    .map(|opt| {
                        let is_selected = move || value.get() == opt;
                        view! {
                            <option value=opt selected=is_selected>
                                {opt}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <span
                class="validation-message"
                style:display=move || message_display(invalid.get())
            >
                {message}
            </span>
        </div>
    }
}
