//! Certificate preview overlay.

use crate::content::{lookup, Certification, ImageRef};
use crate::error::FolioResult;
use crate::keyboard::Key;
use crate::render::{document_action, CardAction};

/// What the preview overlay shows for one certification
#[derive(Debug, Clone, PartialEq)]
pub struct CertPreview {
    pub record: usize,
    pub title: String,
    pub image: ImageRef,
    /// Enabled PDF link, or a disabled one when there is no document
    pub document: CardAction,
}

impl CertPreview {
    fn from_certification(record: usize, cert: &Certification) -> Self {
        let title = if cert.title.trim().is_empty() {
            "Certificate".to_string()
        } else {
            cert.title.clone()
        };
        Self {
            record,
            image: ImageRef::new(cert.thumb.clone(), format!("{title} preview")),
            document: document_action(cert.pdf.as_deref()),
            title,
        }
    }
}

/// Open/close state for the certificate preview
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewController {
    current: Option<CertPreview>,
}

impl PreviewController {
    pub fn open(&mut self, certs: &[Certification], index: usize) -> FolioResult<()> {
        let cert = lookup(certs, index)?;
        tracing::debug!(record = index, "Certificate preview opened");
        self.current = Some(CertPreview::from_certification(index, cert));
        Ok(())
    }

    /// Returns false if the preview was already closed
    pub fn close(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn current(&self) -> Option<&CertPreview> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn locks_scroll(&self) -> bool {
        self.is_open()
    }

    pub fn handle_key(&mut self, key: Key) -> bool {
        key == Key::Escape && self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Markup;

    fn cert(pdf: Option<&str>) -> Certification {
        Certification {
            featured: false,
            title: "Cloud Basics".to_string(),
            date: String::new(),
            pill: None,
            issuer: None,
            issuer_logo: None,
            description: Markup::default(),
            tags: Vec::new(),
            thumb: "cloud.png".to_string(),
            pdf: pdf.map(str::to_string),
        }
    }

    #[test]
    fn test_preview_with_pdf() {
        let certs = vec![cert(Some("cloud.pdf"))];
        let mut preview = PreviewController::default();
        preview.open(&certs, 0).unwrap();
        let current = preview.current().unwrap();
        assert_eq!(current.image.alt, "Cloud Basics preview");
        assert_eq!(current.document.href(), Some("cloud.pdf"));
        assert!(preview.locks_scroll());
    }

    #[test]
    fn test_preview_without_pdf_is_disabled() {
        let certs = vec![cert(None)];
        let mut preview = PreviewController::default();
        preview.open(&certs, 0).unwrap();
        assert!(!preview.current().unwrap().document.is_enabled());
    }

    #[test]
    fn test_escape_closes_once() {
        let certs = vec![cert(None)];
        let mut preview = PreviewController::default();
        assert!(!preview.handle_key(Key::Escape));
        preview.open(&certs, 0).unwrap();
        assert!(!preview.handle_key(Key::ArrowLeft));
        assert!(preview.handle_key(Key::Escape));
        assert!(!preview.close());
        assert!(!preview.locks_scroll());
    }

    #[test]
    fn test_out_of_range() {
        let mut preview = PreviewController::default();
        assert!(preview.open(&[], 3).is_err());
        assert!(!preview.is_open());
    }
}
