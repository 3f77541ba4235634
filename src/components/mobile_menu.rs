//! Mobile Menu Component
//!
//! Full-screen navigation panel for narrow screens. Following any link
//! closes it.

use dioxus::prelude::*;

use crate::components::nav_header::{NavLink, CONTACT_SECTION, NAV_SECTIONS};
use crate::context::use_page;

#[component]
pub fn MobileMenuPanel() -> Element {
    let ctx = use_page();
    let active_class = ctx.menu.read().active_class();

    rsx! {
        div {
            class: "mobile-menu {active_class}",
            "aria-hidden": if ctx.menu.read().is_open() { "false" } else { "true" },

            for section in NAV_SECTIONS.iter().copied() {
                NavLink { key: "{section.id}", section }
            }

            a {
                class: "nav-cta",
                href: "#{CONTACT_SECTION}",
                onclick: move |evt| {
                    evt.prevent_default();
                    ctx.navigate(CONTACT_SECTION);
                },
                "Get in Touch"
            }
        }
    }
}
