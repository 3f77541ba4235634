//! Project Detail Modal
//!
//! Shows the full write-up of one project with an image gallery that
//! advances on its own while the modal is open.

use dioxus::prelude::*;
use folio_core::ModalTarget;

use crate::components::cards::ActionLink;
use crate::context::use_page;

#[component]
pub fn ProjectModal() -> Element {
    let ctx = use_page();

    let Some((content, gallery)) = ctx
        .modal
        .read()
        .session()
        .map(|s| (s.content().clone(), s.gallery_view()))
    else {
        return rsx! {};
    };
    let multiple = gallery.total > 1;

    rsx! {
        div {
            id: "projectModal",
            class: "modal active",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "modalTitle",

            div {
                class: "modal-overlay",
                onclick: move |_| ctx.modal_target(ModalTarget::Overlay),
            }

            div { class: "modal-content",
                button {
                    class: "modal-close",
                    r#type: "button",
                    "aria-label": "Close project details",
                    onclick: move |_| ctx.modal_target(ModalTarget::CloseControl),
                    "×"
                }

                div { class: "modal-gallery",
                    div { class: "gallery-main",
                        img {
                            id: "galleryMainImage",
                            src: "{gallery.main.src}",
                            alt: "{gallery.main.alt}",
                        }

                        if multiple {
                            button {
                                class: "gallery-prev",
                                r#type: "button",
                                "aria-label": "Previous image",
                                onclick: move |_| ctx.modal_target(ModalTarget::Prev),
                                "‹"
                            }
                            button {
                                class: "gallery-next",
                                r#type: "button",
                                "aria-label": "Next image",
                                onclick: move |_| ctx.modal_target(ModalTarget::Next),
                                "›"
                            }
                        }

                        div { class: "gallery-counter",
                            span { id: "galleryCurrentIndex", "{gallery.position}" }
                            " / "
                            span { id: "galleryTotalImages", "{gallery.total}" }
                        }
                    }

                    div { id: "galleryThumbnails", class: "gallery-thumbnails",
                        for thumb in gallery.thumbnails.iter().cloned() {
                            img {
                                key: "{thumb.index}",
                                class: if thumb.active { "gallery-thumbnail active" } else { "gallery-thumbnail" },
                                src: "{thumb.image.src}",
                                alt: "{thumb.image.alt}",
                                onclick: move |_| ctx.modal_target(ModalTarget::Thumbnail(thumb.index)),
                            }
                        }
                    }
                }

                div { class: "modal-body",
                    div { class: "modal-header",
                        h2 { id: "modalTitle", class: "modal-title", "{content.title}" }
                        div { id: "modalType", class: "modal-type", "{content.kind}" }
                    }

                    div {
                        id: "modalDescription",
                        class: "modal-description",
                        dangerous_inner_html: "{content.description.as_str()}",
                    }

                    div { class: "modal-section",
                        h3 { "Technologies" }
                        div { id: "modalTech", class: "modal-tech",
                            for tech in content.tech.iter() {
                                span { class: "tech-tag", "{tech}" }
                            }
                        }
                    }

                    div { class: "modal-section",
                        h3 { "Key Features" }
                        ul { id: "modalFeatures", class: "modal-features",
                            for feature in content.features.iter() {
                                li { "{feature}" }
                            }
                        }
                    }

                    if let Some(challenges) = &content.challenges {
                        div { id: "modalChallengesSection", class: "modal-section",
                            h3 { "Challenges & Solutions" }
                            p { id: "modalChallenges", "{challenges}" }
                        }
                    }

                    div { class: "modal-links",
                        ActionLink { action: content.repository.clone(), class: "modal-link" }
                        if let Some(demo) = content.demo.clone() {
                            ActionLink { action: demo, class: "modal-link primary" }
                        }
                    }
                }
            }
        }
    }
}
