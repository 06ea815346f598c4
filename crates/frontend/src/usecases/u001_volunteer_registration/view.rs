use super::RegistrationContext;
use crate::shared::components::ui::{Button, Checkbox, Input, Select};
use crate::shared::notices::NoticeHost;
use contracts::domain::a002_volunteer_form::FieldKey;
use contracts::enums::InterestArea;
use contracts::shared::config::BehaviorConfig;
use leptos::prelude::*;

pub const FORM_ID: &str = "volunteer-form";
pub const SUBMIT_ID: &str = "submit-btn";
pub const TERMS_ID: &str = "termos";

#[component]
pub fn RegistrationPage(config: BehaviorConfig) -> impl IntoView {
    let ctx = RegistrationContext::new(&config);
    let locked = ctx.locked;
    let can_submit = ctx.can_submit;
    let validation = ctx.validation;
    let form = ctx.form;

    let area_options: Vec<&'static str> = InterestArea::all()
        .into_iter()
        .map(|area| area.display_name())
        .collect();

    view! {
        <section class="container registration">
            <NoticeHost service=ctx.notices />
            <h2 class="registration__title">"Cadastro de voluntário"</h2>
            <form
                id=FORM_ID
                class="registration__form"
                novalidate=true
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    ctx.submit();
                }
            >
                <Input
                    id=FieldKey::Name.element_id()
                    label=FieldKey::Name.label()
                    value=ctx.value(FieldKey::Name)
                    invalid=ctx.field_invalid(FieldKey::Name)
                    message=FieldKey::Name.validation_message()
                    autocomplete="name"
                    disabled=Signal::derive(move || locked.get())
                    on_input=Callback::new(move |v: String| ctx.set_field(FieldKey::Name, v))
                />
                <Input
                    id=FieldKey::Email.element_id()
                    label=FieldKey::Email.label()
                    value=ctx.value(FieldKey::Email)
                    invalid=ctx.field_invalid(FieldKey::Email)
                    message=FieldKey::Email.validation_message()
                    input_type="email"
                    autocomplete="email"
                    disabled=Signal::derive(move || locked.get())
                    on_input=Callback::new(move |v: String| ctx.set_field(FieldKey::Email, v))
                />
                <Select
                    id=FieldKey::Interest.element_id()
                    label=FieldKey::Interest.label()
                    value=ctx.value(FieldKey::Interest)
                    placeholder=config.interest_placeholder.clone()
                    options=area_options
                    invalid=ctx.field_invalid(FieldKey::Interest)
                    message=FieldKey::Interest.validation_message()
                    disabled=Signal::derive(move || locked.get())
                    on_change=Callback::new(move |v: String| ctx.set_field(FieldKey::Interest, v))
                />
                <Checkbox
                    id=TERMS_ID
                    label="Li e aceito os termos de voluntariado."
                    checked=Signal::derive(move || form.with(|f| f.terms_accepted))
                    invalid=Signal::derive(move || !validation.get().terms_accepted)
                    disabled=Signal::derive(move || locked.get())
                    on_change=Callback::new(move |checked: bool| ctx.set_terms_accepted(checked))
                />
                <Button
                    id=SUBMIT_ID
                    button_type="submit"
                    disabled=Signal::derive(move || !can_submit.get())
                >
                    {move || form.with(|f| f.submit_label())}
                </Button>
            </form>
        </section>
    }
}
