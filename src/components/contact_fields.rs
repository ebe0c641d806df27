//! Contact Fields Component
//!
//! Entity name, email and WhatsApp inputs.

use leptos::prelude::*;
use point_form::ContactField;

use crate::context::use_form_context;

/// One labelled text input bound to a contact field
#[component]
fn ContactInput(field: ContactField, #[prop(into)] label: String) -> impl IntoView {
    let ctx = use_form_context();
    let name = field.as_str();
    let value = Memo::new(move |_| ctx.form.with(|form| form.contact_value(field).to_string()));

    view! {
        <div class="field">
            <label for=name>{label}</label>
            <input
                type="text"
                name=name
                id=name
                prop:value=move || value.get()
                on:input=move |ev| ctx.set_contact(field, event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn ContactFields() -> impl IntoView {
    view! {
        <fieldset>
            <legend><h2>"Dados"</h2></legend>
            <ContactInput field=ContactField::Name label="Nome da Entidade" />
            <div class="field-group">
                <ContactInput field=ContactField::Email label="Email" />
                <ContactInput field=ContactField::Whatsapp label="Whatsapp" />
            </div>
        </fieldset>
    }
}
