//! Content record types.

use serde::{Deserialize, Deserializer, Serialize};

/// Author-written HTML that is rendered without escaping.
///
/// Only fields typed as `Markup` bypass escaping; every other string is
/// treated as plain text by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    pub fn trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// An image reference with its alt text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

impl ImageRef {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Outbound links of a record. An absent link means "no action".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, deserialize_with = "non_empty")]
    pub repository: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub live_demo: Option<String>,
}

/// A portfolio project, shown as a card and in the detail modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub detailed_description: Markup,
    pub image: ImageRef,
    #[serde(default)]
    pub gallery: Vec<ImageRef>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub challenges: Option<String>,
    #[serde(default)]
    pub links: Links,
}

/// A certificate or completed training program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default)]
    pub featured: bool,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub pill: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub issuer: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub issuer_logo: Option<String>,
    #[serde(default)]
    pub description: Markup,
    #[serde(default)]
    pub tags: Vec<String>,
    pub thumb: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub pdf: Option<String>,
}

/// Something being built right now
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWorkItem {
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub focus: Option<String>,
    #[serde(default)]
    pub links: Links,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

/// Common view over the three record kinds
pub trait Record {
    /// Name of the list this record kind lives in
    const LIST: &'static str;

    fn title(&self) -> &str;

    /// Ordered display labels (tech stack or tags)
    fn labels(&self) -> &[String];
}

impl Record for Project {
    const LIST: &'static str = "project";

    fn title(&self) -> &str {
        &self.title
    }

    fn labels(&self) -> &[String] {
        &self.tech
    }
}

impl Record for Certification {
    const LIST: &'static str = "certification";

    fn title(&self) -> &str {
        &self.title
    }

    fn labels(&self) -> &[String] {
        &self.tags
    }
}

impl Record for CurrentWorkItem {
    const LIST: &'static str = "current work";

    fn title(&self) -> &str {
        &self.title
    }

    fn labels(&self) -> &[String] {
        &self.tech
    }
}

/// Blank strings in the source data mean "absent"
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
