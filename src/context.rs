//! Page context for the portfolio.
//!
//! Holds every controller in a signal and provides them to all components
//! via use_context. Actions that need timers (gallery auto-advance, status
//! auto-hide, scroll debounce) live here so components only call methods.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let ctx = use_page_provider(site_config(), content_store());
//!
//! // In child components
//! let ctx = use_page();
//! ctx.open_project(card.index);
//! ```

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{
    deliver, Clock, ContactField, ContactForm, ContentStore, Disclosure, Key, KeyboardModality,
    MobileMenu, ModalController, ModalTarget, PreviewController, ScrollController,
    ScrollDebounce, ScrollSnapshot, SiteConfig, SystemClock,
};

use crate::bridge::{self, PageEvent};
use crate::relay::EmailJsRelay;

/// All page state, one signal per controller.
///
/// Every field is `Copy`, so the context can be moved into any number of
/// event handlers.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub config: &'static SiteConfig,
    pub store: &'static ContentStore,
    pub clock: SystemClock,
    pub modal: Signal<ModalController>,
    pub preview: Signal<PreviewController>,
    pub menu: Signal<MobileMenu>,
    pub scroll: Signal<ScrollController>,
    /// Raw scroll events waiting for the burst to settle; not reactive
    scroll_pending: CopyValue<ScrollDebounce>,
    pub contact: Signal<ContactForm>,
    pub modality: Signal<KeyboardModality>,
    pub cert_more: Signal<Disclosure>,
    /// Auto-advance task of the open modal session
    advance_task: Signal<Option<Task>>,
}

/// Hook to access the page context.
pub fn use_page() -> PageContext {
    use_context::<PageContext>()
}

/// Create the page context in the calling component.
pub fn use_page_provider(config: &'static SiteConfig, store: &'static ContentStore) -> PageContext {
    let modal = use_signal(|| ModalController::new(config.timing.auto_advance()));
    let preview = use_signal(PreviewController::default);
    let menu = use_signal(MobileMenu::default);
    let scroll = use_signal(|| ScrollController::new(config));
    let scroll_pending =
        use_hook(|| CopyValue::new(ScrollDebounce::new(config.timing.scroll_debounce())));
    let contact = use_signal(|| ContactForm::new(config.timing.status_hide()));
    let modality = use_signal(KeyboardModality::default);
    let cert_more = use_signal(Disclosure::default);
    let advance_task = use_signal(|| None);

    use_context_provider(|| PageContext {
        config,
        store,
        clock: SystemClock::new(),
        modal,
        preview,
        menu,
        scroll,
        scroll_pending,
        contact,
        modality,
        cert_more,
        advance_task,
    })
}

impl PageContext {
    fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Page scroll is locked while any overlay is open (reactive)
    pub fn page_scroll_locked(&self) -> bool {
        self.menu.read().locks_scroll()
            || self.modal.read().locks_scroll()
            || self.preview.read().locks_scroll()
    }

    // ------------------------------------------------------------------
    // Project modal
    // ------------------------------------------------------------------

    pub fn open_project(self, index: usize) {
        let mut modal = self.modal;
        let opened = modal.write().open(self.store.projects(), index, self.now());
        match opened {
            Ok(()) => self.start_auto_advance(),
            Err(e) => tracing::warn!("Cannot open project modal: {}", e),
        }
    }

    pub fn close_modal(self) {
        let mut modal = self.modal;
        modal.write().close();
        self.stop_auto_advance();
    }

    /// Route a click on a modal control
    pub fn modal_target(self, target: ModalTarget) {
        match target {
            ModalTarget::Overlay | ModalTarget::CloseControl => self.close_modal(),
            other => {
                let mut modal = self.modal;
                modal.write().dispatch(other);
            }
        }
    }

    fn stop_auto_advance(self) {
        let mut advance_task = self.advance_task;
        if let Some(task) = advance_task.write().take() {
            task.cancel();
        };
    }

    /// Drive the open session's ticker until the session ends
    fn start_auto_advance(self) {
        self.stop_auto_advance();
        let Some(session_id) = self.modal.peek().session().map(|s| s.id()) else {
            return;
        };

        let ctx = self;
        let task = spawn(async move {
            let mut modal = ctx.modal;
            loop {
                let due = {
                    let current = modal.peek();
                    match current.session() {
                        Some(s) if s.id() == session_id => current.next_deadline(),
                        _ => None,
                    }
                };
                let Some(due) = due else { break };

                let now = ctx.now();
                if due > now {
                    tokio::time::sleep(due - now).await;
                }
                if modal.peek().session().map(|s| s.id()) != Some(session_id) {
                    break;
                }
                if modal.write().tick(ctx.now()) {
                    tracing::trace!(session = session_id, "Gallery advanced");
                }
            }
            tracing::trace!(session = session_id, "Auto-advance stopped");
        });

        let mut advance_task = self.advance_task;
        advance_task.set(Some(task));
    }

    // ------------------------------------------------------------------
    // Certificate preview
    // ------------------------------------------------------------------

    pub fn open_preview(self, index: usize) {
        let mut preview = self.preview;
        if let Err(e) = preview.write().open(self.store.certifications(), index) {
            tracing::warn!("Cannot open certificate preview: {}", e);
        };
    }

    pub fn close_preview(self) {
        let mut preview = self.preview;
        preview.write().close();
    }

    pub fn toggle_cert_more(self) {
        let mut cert_more = self.cert_more;
        cert_more.write().toggle();
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn toggle_menu(self) {
        let mut menu = self.menu;
        menu.write().toggle();
    }

    /// Follow an in-page link: close the mobile menu and scroll to the section
    pub fn navigate(self, section_id: &str) {
        let mut menu = self.menu;
        if menu.peek().is_open() {
            menu.write().on_navigate();
        }

        // Sections can move without a scroll event
        let ctx = self;
        let section_id = section_id.to_string();
        spawn(async move {
            match bridge::section_top(&section_id).await {
                Some(top) => bridge::scroll_to(ctx.scroll.peek().anchor_position(top)),
                None => tracing::debug!(section = %section_id, "No section for anchor"),
            }
        });
    }

    pub fn back_to_top(self) {
        bridge::scroll_to(0.0);
    }

    // ------------------------------------------------------------------
    // Page events
    // ------------------------------------------------------------------

    pub fn handle_page_event(self, event: PageEvent) {
        match event {
            PageEvent::Scroll(snapshot) => self.on_scroll(snapshot),
            PageEvent::Key { key } => self.on_key(Key::from_name(&key)),
            PageEvent::MouseDown => {
                let mut modality = self.modality;
                if modality.peek().is_keyboard() {
                    modality.write().on_mouse_down();
                }
            }
            PageEvent::OpenProject { index } => self.open_project(index),
            PageEvent::OpenPreview { index } => self.open_preview(index),
        }
    }

    fn on_scroll(self, snapshot: ScrollSnapshot) {
        let mut pending = self.scroll_pending;
        let wait = {
            let mut debounce = pending.write();
            debounce.push(snapshot, self.now());
            debounce.wait()
        };

        let ctx = self;
        spawn(async move {
            tokio::time::sleep(wait).await;
            let mut pending = ctx.scroll_pending;
            let Some(settled) = pending.write().take_due(ctx.now()) else {
                return;
            };
            let mut scroll = ctx.scroll;
            let revealed = scroll.write().apply(settled);
            if !revealed.is_empty() {
                tracing::trace!(?revealed, "Reveal animations triggered");
            }
        });
    }

    fn on_key(self, key: Key) {
        let mut modality = self.modality;
        if key == Key::Tab && !modality.peek().is_keyboard() {
            modality.write().on_key(key);
        }

        if self.modal.peek().is_open() {
            match key {
                Key::Escape => self.close_modal(),
                Key::ArrowLeft | Key::ArrowRight => {
                    let mut modal = self.modal;
                    modal.write().handle_key(key);
                }
                Key::Tab | Key::Other => {}
            }
        } else if key == Key::Escape && self.preview.peek().is_open() {
            self.close_preview();
        }
    }

    // ------------------------------------------------------------------
    // Contact form
    // ------------------------------------------------------------------

    pub fn set_contact_field(self, field: ContactField, value: String) {
        let mut contact = self.contact;
        contact.write().set_field(field, value);
    }

    /// Submit the contact form through the relay widget
    pub fn submit_contact(self) {
        let mut contact = self.contact;
        let message = match contact.write().begin() {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!("Submit ignored: {}", e);
                return;
            }
        };

        let ctx = self;
        spawn(async move {
            let relay = EmailJsRelay::initialized();
            let outcome = deliver(relay.as_ref(), &ctx.config.relay, &message).await;

            let mut contact = ctx.contact;
            contact.write().settle(outcome, ctx.now());

            // A newer status moves the deadline, so this wake-up is then a no-op
            tokio::time::sleep(ctx.config.timing.status_hide()).await;
            contact.write().tick(ctx.now());
        });
    }
}
