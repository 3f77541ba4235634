use dioxus::prelude::*;
use folio_core::keyboard::KEYBOARD_NAVIGATION_CLASS;

use crate::components::{BackToTop, CertPreviewModal, NavHeader, ProjectModal, ScrollProgress};
use crate::context::use_page_provider;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;
use crate::{bridge, content_store, relay, site_config};

/// Root application component.
///
/// Provides global styles and the page context, and wires the page bridge.
#[component]
pub fn App() -> Element {
    let ctx = use_page_provider(site_config(), content_store());

    // Install the page bridge and configure the relay once on mount
    use_hook(move || {
        relay::init(&ctx.config.relay.public_key);
        spawn(bridge::listen(ctx));
    });

    // Overlays lock page scrolling
    use_effect(move || {
        bridge::set_scroll_locked(ctx.page_scroll_locked());
    });

    // Focus outlines only while navigating with the keyboard
    use_effect(move || {
        let keyboard = ctx.modality.read().is_keyboard();
        bridge::set_page_class(KEYBOARD_NAVIGATION_CLASS, keyboard);
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        ScrollProgress {}
        NavHeader {}
        Home {}
        ProjectModal {}
        CertPreviewModal {}
        BackToTop {}
    }
}
