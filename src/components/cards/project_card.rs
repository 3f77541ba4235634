use dioxus::prelude::*;
use folio_core::render::ProjectCard;

use crate::components::Reveal;

/// Project card in the projects grid; the page bridge turns clicks and Enter
/// on it into opening the detail modal
#[component]
pub fn ProjectCardView(card: ProjectCard) -> Element {
    let html = card.to_html();

    rsx! {
        Reveal { id: "project-{card.index}",
            div { class: "card-slot", dangerous_inner_html: "{html}" }
        }
    }
}
