//! Certificate Preview Modal
//!
//! Enlarged certificate image with a link to the PDF when there is one.

use dioxus::prelude::*;

use crate::components::cards::ActionLink;
use crate::context::use_page;

#[component]
pub fn CertPreviewModal() -> Element {
    let ctx = use_page();

    let Some(preview) = ctx.preview.read().current().cloned() else {
        return rsx! {};
    };

    rsx! {
        div {
            id: "certModal",
            class: "cert-modal is-open",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "certModalTitle",
            onclick: move |_| ctx.close_preview(),

            div {
                class: "cert-modal-content",
                onclick: move |evt| evt.stop_propagation(),

                button {
                    class: "cert-modal-close",
                    r#type: "button",
                    "aria-label": "Close preview",
                    onclick: move |_| ctx.close_preview(),
                    "×"
                }

                h3 { id: "certModalTitle", class: "cert-modal-title", "{preview.title}" }
                img {
                    id: "certModalImage",
                    class: "cert-modal-image",
                    src: "{preview.image.src}",
                    alt: "{preview.image.alt}",
                }

                div { id: "certModalPdf", class: "cert-modal-actions",
                    ActionLink { action: preview.document.clone(), class: "cert-link" }
                }
            }
        }
    }
}
