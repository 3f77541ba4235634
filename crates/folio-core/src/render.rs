//! Card rendering.
//!
//! Pure mapping from content records to card views. A card view is what the
//! page components draw; [`ProjectCard::to_html`] and friends give the same
//! card as an escaped markup fragment.
//!
//! Plain-text fields are always escaped. [`Markup`] fields are author-written
//! HTML and pass through untouched.
//!
//! Missing links are not symmetric: a missing demo link drops the action,
//! while a missing certificate PDF renders a disabled placeholder.

use std::fmt::Write;

use crate::content::{Certification, CurrentWorkItem, ImageRef, Markup, Project, Record};

/// At most this many featured certifications sit in the always-visible region
pub const FEATURED_LIMIT: usize = 2;

const REPOSITORY_LABEL: &str = "GitHub →";
const LIVE_DEMO_LABEL: &str = "Live Demo →";
const PDF_LABEL: &str = "View PDF →";
const NO_PDF_LABEL: &str = "No PDF available";

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// What an action on a card points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRole {
    Repository,
    LiveDemo,
    Document,
}

/// A link on a card, or a disabled stand-in for one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Link {
        role: ActionRole,
        label: &'static str,
        href: String,
    },
    Disabled {
        role: ActionRole,
        label: &'static str,
    },
}

impl CardAction {
    fn link(role: ActionRole, label: &'static str, href: &str) -> Self {
        Self::Link {
            role,
            label,
            href: href.to_string(),
        }
    }

    pub fn role(&self) -> ActionRole {
        match self {
            Self::Link { role, .. } | Self::Disabled { role, .. } => *role,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Link { label, .. } | Self::Disabled { label, .. } => label,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Link { href, .. } => Some(href),
            Self::Disabled { .. } => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Link { .. })
    }

    fn write_html(&self, out: &mut String, class: &str) {
        match self {
            Self::Link { label, href, .. } => {
                let _ = write!(
                    out,
                    r#"<a class="{class}" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    escape_html(href),
                    escape_html(label)
                );
            }
            Self::Disabled { label, .. } => {
                let _ = write!(
                    out,
                    r#"<span class="{class} disabled" aria-disabled="true">{}</span>"#,
                    escape_html(label)
                );
            }
        }
    }
}

/// Actions for a repository/demo link pair; absent links produce nothing
fn link_actions(repository: Option<&str>, live_demo: Option<&str>) -> Vec<CardAction> {
    let mut actions = Vec::with_capacity(2);
    if let Some(href) = repository {
        actions.push(CardAction::link(ActionRole::Repository, REPOSITORY_LABEL, href));
    }
    if let Some(href) = live_demo {
        actions.push(CardAction::link(ActionRole::LiveDemo, LIVE_DEMO_LABEL, href));
    }
    actions
}

fn write_tags(out: &mut String, class: &str, tags: &[String]) {
    for tag in tags {
        let _ = write!(out, r#"<span class="{class}">{}</span>"#, escape_html(tag));
    }
}

fn write_img(out: &mut String, class: Option<&str>, image: &ImageRef) {
    let class_attr = class
        .map(|c| format!(r#" class="{c}""#))
        .unwrap_or_default();
    let _ = write!(
        out,
        r#"<img{class_attr} src="{}" alt="{}" loading="lazy">"#,
        escape_html(&image.src),
        escape_html(&image.alt)
    );
}

// ============================================================================
// Projects
// ============================================================================

/// A project card in the projects grid
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    /// Position in the project list; the modal resolves clicks by this
    pub index: usize,
    pub title: String,
    pub kind: String,
    pub description: String,
    pub image: ImageRef,
    pub tags: Vec<String>,
    pub actions: Vec<CardAction>,
}

impl ProjectCard {
    pub fn count_actions(&self, role: ActionRole) -> usize {
        self.actions.iter().filter(|a| a.role() == role).count()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, r#"<article class="project-card" data-index="{}" tabindex="0">"#, self.index);
        out.push_str(r#"<div class="project-image">"#);
        write_img(&mut out, None, &self.image);
        out.push_str("</div>");
        out.push_str(r#"<div class="project-content"><div class="project-header">"#);
        let _ = write!(
            out,
            r#"<h3 class="project-title">{}</h3><div class="project-type">{}</div></div>"#,
            escape_html(&self.title),
            escape_html(&self.kind)
        );
        let _ = write!(
            out,
            r#"<p class="project-description">{}</p>"#,
            escape_html(&self.description)
        );
        out.push_str(r#"<div class="project-tech">"#);
        write_tags(&mut out, "tech-tag", &self.tags);
        out.push_str(r#"</div><div class="project-links">"#);
        for action in &self.actions {
            action.write_html(&mut out, "project-link");
        }
        out.push_str("</div></div></article>");
        out
    }
}

pub fn project_card(index: usize, project: &Project) -> ProjectCard {
    ProjectCard {
        index,
        title: project.title.clone(),
        kind: project.kind.clone(),
        description: project.description.clone(),
        image: project.image.clone(),
        tags: project.labels().to_vec(),
        actions: link_actions(
            project.links.repository.as_deref(),
            project.links.live_demo.as_deref(),
        ),
    }
}

pub fn project_cards(projects: &[Project]) -> Vec<ProjectCard> {
    projects
        .iter()
        .enumerate()
        .map(|(i, p)| project_card(i, p))
        .collect()
}

// ============================================================================
// Certifications
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CertificationCard {
    /// Position in the full certification list
    pub index: usize,
    pub title: String,
    pub subtitle: String,
    pub pill: String,
    pub issuer_logo: Option<ImageRef>,
    pub description: Option<Markup>,
    pub tags: Vec<String>,
    pub thumb: ImageRef,
    /// Always present: a PDF link or a disabled placeholder
    pub action: CardAction,
}

impl CertificationCard {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, r#"<article class="cert-card" data-index="{}">"#, self.index);
        out.push_str(r#"<div class="cert-top"><div class="cert-issuer">"#);
        if let Some(logo) = &self.issuer_logo {
            write_img(&mut out, Some("cert-issuer-logo"), logo);
        }
        let _ = write!(
            out,
            r#"<div><h4 class="cert-title">{}</h4><p class="cert-subtitle">{}</p></div></div>"#,
            escape_html(&self.title),
            escape_html(&self.subtitle)
        );
        let _ = write!(out, r#"<span class="cert-pill">{}</span></div>"#, escape_html(&self.pill));
        if let Some(description) = &self.description {
            let _ = write!(out, r#"<p class="cert-desc">{}</p>"#, description.as_str());
        }
        out.push_str(r#"<div class="cert-tags">"#);
        write_tags(&mut out, "tag", &self.tags);
        let _ = write!(
            out,
            r#"</div><div class="cert-media"><button class="thumb-btn" type="button" aria-label="Preview {}">"#,
            escape_html(&self.title)
        );
        write_img(&mut out, Some("thumb"), &self.thumb);
        out.push_str(r#"<span class="thumb-overlay">Preview</span></button></div>"#);
        out.push_str(r#"<div class="cert-actions">"#);
        self.action.write_html(&mut out, "cert-link");
        out.push_str("</div></article>");
        out
    }
}

/// Link for a certificate document, or the disabled placeholder
pub fn document_action(pdf: Option<&str>) -> CardAction {
    match pdf {
        Some(href) => CardAction::link(ActionRole::Document, PDF_LABEL, href),
        None => CardAction::Disabled {
            role: ActionRole::Document,
            label: NO_PDF_LABEL,
        },
    }
}

pub fn certification_card(index: usize, cert: &Certification) -> CertificationCard {
    let issuer = cert.issuer.as_deref().unwrap_or("Issuer");
    CertificationCard {
        index,
        title: cert.title.clone(),
        subtitle: cert.date.clone(),
        pill: cert.pill.clone().unwrap_or_else(|| "Certificate".to_string()),
        issuer_logo: cert
            .issuer_logo
            .as_ref()
            .map(|src| ImageRef::new(src.clone(), format!("{issuer} logo"))),
        description: (!cert.description.is_empty()).then(|| cert.description.clone()),
        tags: cert.labels().to_vec(),
        thumb: ImageRef::new(cert.thumb.clone(), format!("{} thumbnail", cert.title)),
        action: document_action(cert.pdf.as_deref()),
    }
}

/// Certifications split into the always-visible and expandable regions
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CertificationSections {
    pub featured: Vec<CertificationCard>,
    pub more: Vec<CertificationCard>,
}

impl CertificationSections {
    /// The "view more" control only exists when there is more to show
    pub fn has_more(&self) -> bool {
        !self.more.is_empty()
    }
}

pub fn certification_sections(certs: &[Certification]) -> CertificationSections {
    let mut sections = CertificationSections::default();
    for (index, cert) in certs.iter().enumerate() {
        if cert.featured {
            if sections.featured.len() < FEATURED_LIMIT {
                sections.featured.push(certification_card(index, cert));
            }
        } else {
            sections.more.push(certification_card(index, cert));
        }
    }
    sections
}

// ============================================================================
// Current work
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWorkCard {
    pub index: usize,
    pub title: String,
    pub status: String,
    pub description: String,
    pub tags: Vec<String>,
    pub focus: Option<String>,
    pub image: Option<ImageRef>,
    pub actions: Vec<CardAction>,
}

impl CurrentWorkCard {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, r#"<article class="current-card" data-index="{}">"#, self.index);
        if let Some(image) = &self.image {
            out.push_str(r#"<div class="current-image">"#);
            write_img(&mut out, None, image);
            out.push_str("</div>");
        }
        let _ = write!(
            out,
            r#"<div class="current-title-row"><h3 class="current-title">{}</h3><span class="current-status">{}</span></div>"#,
            escape_html(&self.title),
            escape_html(&self.status)
        );
        let _ = write!(
            out,
            r#"<p class="current-description">{}</p>"#,
            escape_html(&self.description)
        );
        out.push_str(r#"<div class="current-meta">"#);
        write_tags(&mut out, "tech-tag", &self.tags);
        out.push_str("</div>");
        if let Some(focus) = &self.focus {
            let _ = write!(out, r#"<div class="current-focus">{}</div>"#, escape_html(focus));
        }
        out.push_str(r#"<div class="current-links">"#);
        for action in &self.actions {
            action.write_html(&mut out, "current-link");
        }
        out.push_str("</div></article>");
        out
    }
}

pub fn current_work_card(index: usize, item: &CurrentWorkItem) -> CurrentWorkCard {
    CurrentWorkCard {
        index,
        title: item.title.clone(),
        status: item.status.clone(),
        description: item.description.clone(),
        tags: item.labels().to_vec(),
        focus: item.focus.clone(),
        image: item.image.clone().map(|mut image| {
            if image.alt.is_empty() {
                image.alt = item.title.clone();
            }
            image
        }),
        actions: link_actions(
            item.links.repository.as_deref(),
            item.links.live_demo.as_deref(),
        ),
    }
}

pub fn current_work_cards(items: &[CurrentWorkItem]) -> Vec<CurrentWorkCard> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| current_work_card(i, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Links;

    fn project(title: &str, tech: &[&str], demo: Option<&str>) -> Project {
        Project {
            title: title.to_string(),
            kind: "Personal".to_string(),
            description: "desc".to_string(),
            detailed_description: Markup::trusted("<p>detail</p>"),
            image: ImageRef::new("main.png", "Main"),
            gallery: Vec::new(),
            tech: tech.iter().map(|s| s.to_string()).collect(),
            features: Vec::new(),
            challenges: None,
            links: Links {
                repository: Some("https://example.com/repo".to_string()),
                live_demo: demo.map(str::to_string),
            },
        }
    }

    fn cert(title: &str, featured: bool, pdf: Option<&str>) -> Certification {
        Certification {
            featured,
            title: title.to_string(),
            date: "2025".to_string(),
            pill: None,
            issuer: None,
            issuer_logo: None,
            description: Markup::trusted("<strong>Java</strong>"),
            tags: vec!["Java".to_string()],
            thumb: "thumb.png".to_string(),
            pdf: pdf.map(str::to_string),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_project_without_demo_has_no_demo_action() {
        let card = project_card(0, &project("A", &["X", "Y"], None));
        assert_eq!(card.tags, vec!["X", "Y"]);
        assert_eq!(card.count_actions(ActionRole::LiveDemo), 0);
        assert_eq!(card.count_actions(ActionRole::Repository), 1);

        let html = card.to_html();
        assert_eq!(html.matches(r#"class="tech-tag""#).count(), 2);
        assert!(!html.contains(LIVE_DEMO_LABEL));
    }

    #[test]
    fn test_project_with_demo() {
        let card = project_card(3, &project("A", &[], Some("https://demo")));
        assert_eq!(card.count_actions(ActionRole::LiveDemo), 1);
        assert!(card.to_html().contains(r#"href="https://demo""#));
        assert!(card.to_html().contains(r#"data-index="3""#));
    }

    #[test]
    fn test_project_text_is_escaped() {
        let card = project_card(0, &project("<script>alert(1)</script>", &["<b>"], None));
        let html = card.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_certification_without_pdf_has_one_placeholder() {
        let card = certification_card(0, &cert("Cloud", false, None));
        assert!(!card.action.is_enabled());
        assert_eq!(card.action.label(), NO_PDF_LABEL);

        let html = card.to_html();
        assert_eq!(html.matches(NO_PDF_LABEL).count(), 1);
        assert_eq!(html.matches("aria-disabled").count(), 1);
    }

    #[test]
    fn test_certification_with_pdf() {
        let card = certification_card(0, &cert("Java", true, Some("java.pdf")));
        assert_eq!(card.action.href(), Some("java.pdf"));
        assert_eq!(card.pill, "Certificate");
        assert_eq!(card.thumb.alt, "Java thumbnail");
    }

    #[test]
    fn test_certification_description_is_trusted() {
        let html = certification_card(0, &cert("Java", true, None)).to_html();
        assert!(html.contains("<strong>Java</strong>"));
    }

    #[test]
    fn test_issuer_logo_alt_defaults() {
        let mut c = cert("Java", true, None);
        c.issuer_logo = Some("logo.png".to_string());
        let card = certification_card(0, &c);
        assert_eq!(card.issuer_logo.unwrap().alt, "Issuer logo");
    }

    #[test]
    fn test_certification_sections() {
        let certs = vec![
            cert("F1", true, None),
            cert("M1", false, None),
            cert("F2", true, None),
            cert("F3", true, None),
            cert("M2", false, None),
        ];
        let sections = certification_sections(&certs);
        let featured: Vec<_> = sections.featured.iter().map(|c| c.index).collect();
        let more: Vec<_> = sections.more.iter().map(|c| c.index).collect();
        assert_eq!(featured, vec![0, 2]);
        assert_eq!(more, vec![1, 4]);
        assert!(sections.has_more());
    }

    #[test]
    fn test_featured_overflow_is_not_shown() {
        let certs = vec![
            cert("F1", true, None),
            cert("F2", true, None),
            cert("F3", true, None),
        ];
        let sections = certification_sections(&certs);
        assert_eq!(sections.featured.len(), FEATURED_LIMIT);
        // Featured records past the limit go nowhere, not behind the disclosure
        assert!(sections.more.is_empty());
        assert!(!sections.has_more());
    }

    #[test]
    fn test_tags_follow_record_labels() {
        let p = project("Tank", &["Java", "Swing"], None);
        assert_eq!(project_card(0, &p).tags, p.labels());

        let c = cert("Java", true, None);
        let card = certification_card(0, &c);
        assert_eq!(card.tags, c.labels());
        assert!(card.to_html().contains(r#"aria-label="Preview Java""#));
    }

    #[test]
    fn test_no_more_region_hides_control() {
        let sections = certification_sections(&[cert("F1", true, None)]);
        assert!(!sections.has_more());
    }

    #[test]
    fn test_current_work_omits_missing_links() {
        let item = CurrentWorkItem {
            title: "JRJT".to_string(),
            status: "In progress".to_string(),
            description: "Repair shop".to_string(),
            tech: vec!["React".to_string()],
            focus: None,
            links: Links {
                repository: None,
                live_demo: Some("https://demo".to_string()),
            },
            image: Some(ImageRef::new("jrjt.png", "")),
        };
        let card = current_work_card(0, &item);
        assert_eq!(card.actions.len(), 1);
        assert_eq!(card.actions[0].role(), ActionRole::LiveDemo);
        assert_eq!(card.image.as_ref().unwrap().alt, "JRJT");
        assert!(!card.to_html().contains("current-focus"));
    }
}
