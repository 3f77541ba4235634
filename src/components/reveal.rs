//! Reveal-on-scroll wrapper.
//!
//! Wrapped content starts hidden and gets the `revealed` class the first
//! time enough of it scrolls into view. The page bridge reports every
//! `data-reveal` element that is not yet revealed.

use dioxus::prelude::*;
use folio_core::reveal::stagger_delay;

use crate::context::use_page;

#[component]
pub fn Reveal(
    /// Stable id, unique on the page
    id: String,
    /// Extra classes for the wrapper
    #[props(default)]
    class: String,
    /// Position within a staggered group
    #[props(default)]
    stagger: usize,
    children: Element,
) -> Element {
    let ctx = use_page();
    let revealed = ctx.scroll.read().is_revealed(&id);
    let delay = stagger_delay(stagger, ctx.config.timing.reveal_stagger()).as_millis();
    let state = if revealed { "reveal revealed" } else { "reveal" };

    rsx! {
        div {
            class: "{class} {state}",
            "data-reveal": "{id}",
            style: "transition-delay: {delay}ms",
            {children}
        }
    }
}
