use dioxus::prelude::*;

use crate::context::use_page;

/// Floating button shown once the page is scrolled past the threshold
#[component]
pub fn BackToTop() -> Element {
    let ctx = use_page();
    let visible = ctx.scroll.read().nav().back_to_top_visible;

    rsx! {
        button {
            id: "backToTop",
            class: if visible { "back-to-top show" } else { "back-to-top" },
            r#type: "button",
            "aria-label": "Back to top",
            onclick: move |_| ctx.back_to_top(),
            "↑"
        }
    }
}
