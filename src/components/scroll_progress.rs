//! Reading progress bar pinned to the top of the page.

use dioxus::prelude::*;

use crate::context::use_page;

#[component]
pub fn ScrollProgress() -> Element {
    let ctx = use_page();
    let progress = ctx.scroll.read().nav().progress;

    rsx! {
        div {
            class: "scroll-progress",
            style: "width: {progress:.2}%",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{progress:.0}",
        }
    }
}
