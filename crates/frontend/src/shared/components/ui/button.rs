use leptos::prelude::*;

/// Primary button
#[component]
pub fn Button(
    /// ID for the button element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let btn_id = move || id.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            id=btn_id
            type=btn_type
            class="btn btn-primary"
            disabled=move || disabled.get().unwrap_or(false)
        >
            {children()}
        </button>
    }
}
