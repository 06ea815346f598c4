use super::validity::{aria_invalid, message_display, with_invalid};
use leptos::prelude::*;

/// Required text input inside a `.form-field` wrapper, with its
/// `.validation-message`.
#[component]
pub fn Input(
    /// ID for the input element
    id: &'static str,
    /// Label text
    label: &'static str,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Whether the current value fails validation
    #[prop(into)]
    invalid: Signal<bool>,
    /// Message revealed while the value is invalid
    message: &'static str,
    /// Input event handler, fired on both `input` and `change`
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Input type: "text" (default), "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let emit = move |ev: leptos::ev::Event| {
        if let Some(handler) = on_input {
            handler.run(event_target_value(&ev));
        }
    };

    view! {
        <div class="form-field">
            <label class="form-label" for=id>
                {label}
            </label>
            <input
                id=id
                name=id
                class=move || with_invalid("form-input", invalid.get())
                type=input_t
                prop:value=move || value.get()
                aria-invalid=move || aria_invalid(invalid.get())
                disabled=move || disabled.get().unwrap_or(false)
                required=true
                autocomplete=input_autocomplete
                on:input=emit
                on:change=emit
            />
            <span
                class="validation-message"
                style:display=move || message_display(invalid.get())
            >
                {message}
            </span>
        </div>
    }
}
