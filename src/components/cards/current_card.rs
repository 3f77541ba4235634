use dioxus::prelude::*;
use folio_core::render::CurrentWorkCard;

/// Card for something in progress
#[component]
pub fn CurrentWorkCardView(card: CurrentWorkCard) -> Element {
    let html = card.to_html();

    rsx! {
        div { class: "card-slot", dangerous_inner_html: "{html}" }
    }
}
