//! Card components for the data-driven sections.
//!
//! Cards draw the escaped markup from `folio_core::render`. Their clicks are
//! delegated to the page bridge by `data-index`. [`ActionLink`] is the same
//! link markup for the overlays, which are drawn as components.

mod certification_card;
mod current_card;
mod project_card;

pub use certification_card::CertificationCardView;
pub use current_card::CurrentWorkCardView;
pub use project_card::ProjectCardView;

use dioxus::prelude::*;
use folio_core::render::CardAction;

/// A card link, or its disabled placeholder
#[component]
pub fn ActionLink(action: CardAction, class: &'static str) -> Element {
    match action.href() {
        Some(href) => rsx! {
            a {
                class: "{class}",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                onclick: move |evt| evt.stop_propagation(),
                "{action.label()}"
            }
        },
        None => rsx! {
            span {
                class: "{class} disabled",
                "aria-disabled": "true",
                "{action.label()}"
            }
        },
    }
}
