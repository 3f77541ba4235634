//! Navigation Header Component
//!
//! Fixed top navigation with section links, active-section highlighting and
//! the mobile menu toggle.

use dioxus::prelude::*;

use crate::components::mobile_menu::MobileMenuPanel;
use crate::context::use_page;

/// A page section reachable from the navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

/// Sections in page order
pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection { id: "home", label: "Home" },
    NavSection { id: "about", label: "About" },
    NavSection { id: "skills", label: "Skills" },
    NavSection { id: "experience", label: "Experience" },
    NavSection { id: "projects", label: "Projects" },
    NavSection { id: "current", label: "Current Work" },
    NavSection { id: "certifications", label: "Certifications" },
];

/// Section the call-to-action button jumps to
pub const CONTACT_SECTION: &str = "contact";

/// In-page link that scrolls to a section instead of jumping
#[component]
pub fn NavLink(section: NavSection) -> Element {
    let ctx = use_page();
    let active = ctx.scroll.read().nav().active_section.as_deref() == Some(section.id);

    rsx! {
        a {
            class: if active { "nav-link active" } else { "nav-link" },
            href: "#{section.id}",
            onclick: move |evt| {
                evt.prevent_default();
                ctx.navigate(section.id);
            },
            "{section.label}"
        }
    }
}

/// Top navigation bar
#[component]
pub fn NavHeader() -> Element {
    let ctx = use_page();
    let scrolled = ctx.scroll.read().nav().header_scrolled;
    let menu_class = ctx.menu.read().active_class();

    rsx! {
        nav {
            class: if scrolled { "nav scrolled" } else { "nav" },

            div { class: "nav-container",
                a {
                    class: "nav-logo",
                    href: "#home",
                    onclick: move |evt| {
                        evt.prevent_default();
                        ctx.navigate("home");
                    },
                    "Portfolio"
                }

                div { class: "nav-links",
                    for section in NAV_SECTIONS.iter().copied() {
                        NavLink { key: "{section.id}", section }
                    }
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

                button {
                    class: "mobile-menu-toggle {menu_class}",
                    r#type: "button",
                    "aria-label": "Toggle navigation menu",
                    "aria-expanded": if ctx.menu.read().is_open() { "true" } else { "false" },
                    onclick: move |_| ctx.toggle_menu(),
                    span {}
                    span {}
                    span {}
                }
            }
        }

        MobileMenuPanel {}
    }
}
