use dioxus::prelude::*;
use folio_core::render::CertificationCard;

/// Certification card; a click on its thumbnail opens the certificate preview
/// through the page bridge
#[component]
pub fn CertificationCardView(card: CertificationCard) -> Element {
    let html = card.to_html();

    rsx! {
        div { class: "card-slot", dangerous_inner_html: "{html}" }
    }
}
