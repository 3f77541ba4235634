//! UI components for the portfolio page.

pub mod cards;
mod back_to_top;
mod cert_preview_modal;
mod contact_form;
mod mobile_menu;
pub mod nav_header;
mod project_modal;
mod reveal;
mod scroll_progress;

pub use back_to_top::BackToTop;
pub use cert_preview_modal::CertPreviewModal;
pub use contact_form::ContactFormView;
pub use nav_header::NavHeader;
pub use project_modal::ProjectModal;
pub use reveal::Reveal;
pub use scroll_progress::ScrollProgress;
