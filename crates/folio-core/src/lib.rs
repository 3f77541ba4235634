//! Folio Core Library
//!
//! Content and page-state controllers for a single-page portfolio.
//!
//! ## Overview
//!
//! The page has three data-driven sections (projects, certifications,
//! current work) and a handful of interactive pieces: a project detail
//! modal with an auto-advancing gallery, a certificate preview, scroll-driven
//! navigation effects, a mobile menu and a contact form backed by a
//! client-side email relay.
//!
//! Nothing in this crate touches a DOM. Controllers take plain data (indices,
//! scroll snapshots, key names, timestamps) and expose the state to draw, so
//! the UI layer binds elements once and every behaviour is testable with a
//! [`timer::ManualClock`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{ContentStore, ModalController, SiteConfig};
//!
//! let store = ContentStore::global()?;
//! let config = SiteConfig::default();
//!
//! let cards = folio_core::render::project_cards(store.projects());
//! let mut modal = ModalController::new(config.timing.auto_advance());
//! modal.open(store.projects(), cards[0].index, clock.now())?;
//! ```

pub mod config;
pub mod contact;
pub mod content;
pub mod disclosure;
pub mod error;
pub mod gallery;
pub mod keyboard;
pub mod menu;
pub mod modal;
pub mod preview;
pub mod render;
pub mod reveal;
pub mod scroll;
pub mod timer;

// Re-exports
pub use config::{RelayConfig, ScrollConfig, SiteConfig, TimingConfig};
pub use contact::{
    deliver, ContactField, ContactForm, ContactMessage, EmailRelay, FormStatus, RelayError,
    StatusKind, SubmitButton,
};
pub use content::{Certification, ContentStore, CurrentWorkItem, ImageRef, Links, Markup, Project};
pub use disclosure::Disclosure;
pub use error::{FolioError, FolioResult};
pub use gallery::{GalleryState, GalleryView, Thumbnail};
pub use keyboard::{Key, KeyboardModality};
pub use menu::MobileMenu;
pub use modal::{ModalContent, ModalController, ModalSession, ModalState, ModalTarget};
pub use preview::{CertPreview, PreviewController};
pub use scroll::{NavState, ScrollController, ScrollDebounce, ScrollSnapshot, SectionBounds};
pub use timer::{Clock, ManualClock, SystemClock};
