//! Contact Form Component
//!
//! Sends a message through the email relay and shows the outcome in a
//! status line that hides itself.

use dioxus::prelude::*;
use folio_core::ContactField;

use crate::context::use_page;

/// One labelled input bound to a contact field
#[component]
fn FormField(field: ContactField, label: &'static str, kind: &'static str) -> Element {
    let ctx = use_page();
    let value = ctx.contact.read().fields().get(field).to_string();
    let name = field_name(field);

    rsx! {
        div { class: "form-group",
            label { r#for: "{name}", "{label}" }
            if kind == "textarea" {
                textarea {
                    id: "{name}",
                    name: "{name}",
                    rows: "5",
                    required: true,
                    value: "{value}",
                    oninput: move |e| ctx.set_contact_field(field, e.value()),
                }
            } else {
                input {
                    id: "{name}",
                    name: "{name}",
                    r#type: "{kind}",
                    required: true,
                    value: "{value}",
                    oninput: move |e| ctx.set_contact_field(field, e.value()),
                }
            }
        }
    }
}

fn field_name(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "name",
        ContactField::Email => "email",
        ContactField::Subject => "subject",
        ContactField::Message => "message",
    }
}

#[component]
pub fn ContactFormView() -> Element {
    let ctx = use_page();
    let button = ctx.contact.read().submit_button();
    let status = ctx.contact.read().status().cloned();

    rsx! {
        form {
            id: "contactForm",
            class: "contact-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                ctx.submit_contact();
            },

            FormField { field: ContactField::Name, label: "Name", kind: "text" }
            FormField { field: ContactField::Email, label: "Email", kind: "email" }
            FormField { field: ContactField::Subject, label: "Subject", kind: "text" }
            FormField { field: ContactField::Message, label: "Message", kind: "textarea" }

            button {
                id: "submitBtn",
                class: "btn btn-primary submit-btn",
                r#type: "submit",
                disabled: button.disabled,
                span { id: "submitText", "{button.label}" }
            }

            if let Some(status) = status {
                div {
                    id: "formStatus",
                    class: "form-status {status.kind.css_class()}",
                    role: "status",
                    "{status.message}"
                }
            } else {
                div { id: "formStatus", class: "form-status", role: "status" }
            }
        }
    }
}
