//! Content store.
//!
//! Three ordered, read-only lists (projects, certifications, current work)
//! embedded in the binary as JSON and parsed once per process. A record's
//! identity during a page session is its index in its list; nothing
//! reorders the lists after load.

mod types;

use std::sync::OnceLock;

use serde::de::DeserializeOwned;

use crate::error::{FolioError, FolioResult};

pub use types::{CurrentWorkItem, Certification, ImageRef, Links, Markup, Project, Record};

const PROJECTS_JSON: &str = include_str!("../../content/projects.json");
const CERTIFICATIONS_JSON: &str = include_str!("../../content/certifications.json");
const CURRENT_WORK_JSON: &str = include_str!("../../content/current_work.json");

static STORE: OnceLock<ContentStore> = OnceLock::new();

/// The page's content, immutable after load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentStore {
    projects: Vec<Project>,
    certifications: Vec<Certification>,
    current_work: Vec<CurrentWorkItem>,
}

impl ContentStore {
    /// A store with no records; every data-driven section renders empty
    pub const fn empty() -> Self {
        Self {
            projects: Vec::new(),
            certifications: Vec::new(),
            current_work: Vec::new(),
        }
    }

    /// Build a store from already-parsed lists, validating every record
    pub fn new(
        projects: Vec<Project>,
        certifications: Vec<Certification>,
        current_work: Vec<CurrentWorkItem>,
    ) -> FolioResult<Self> {
        validate(&projects)?;
        validate(&certifications)?;
        validate(&current_work)?;
        Ok(Self {
            projects,
            certifications,
            current_work,
        })
    }

    /// Parse the three lists from JSON arrays
    pub fn from_json(
        projects: &str,
        certifications: &str,
        current_work: &str,
    ) -> FolioResult<Self> {
        Self::new(
            parse_list(projects)?,
            parse_list(certifications)?,
            parse_list(current_work)?,
        )
    }

    /// Parse the content bundled with the crate
    pub fn embedded() -> FolioResult<Self> {
        Self::from_json(PROJECTS_JSON, CERTIFICATIONS_JSON, CURRENT_WORK_JSON)
    }

    /// Process-wide store, loaded from the embedded content on first use
    pub fn global() -> FolioResult<&'static ContentStore> {
        if let Some(store) = STORE.get() {
            return Ok(store);
        }
        let store = Self::embedded()?;
        tracing::info!(
            projects = store.projects.len(),
            certifications = store.certifications.len(),
            current_work = store.current_work.len(),
            "Content store loaded"
        );
        Ok(STORE.get_or_init(|| store))
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn certifications(&self) -> &[Certification] {
        &self.certifications
    }

    pub fn current_work(&self) -> &[CurrentWorkItem] {
        &self.current_work
    }

    pub fn project(&self, index: usize) -> FolioResult<&Project> {
        lookup(&self.projects, index)
    }

    pub fn certification(&self, index: usize) -> FolioResult<&Certification> {
        lookup(&self.certifications, index)
    }
}

/// Resolve a rendered index back to its record
pub fn lookup<R>(list: &[R], index: usize) -> FolioResult<&R> {
    list.get(index).ok_or(FolioError::RecordOutOfRange {
        index,
        len: list.len(),
    })
}

fn parse_list<R: DeserializeOwned>(json: &str) -> FolioResult<Vec<R>> {
    Ok(serde_json::from_str(json)?)
}

fn validate<R: Record>(list: &[R]) -> FolioResult<()> {
    for (index, record) in list.iter().enumerate() {
        if record.title().trim().is_empty() {
            return Err(FolioError::InvalidRecord {
                list: R::LIST,
                index,
                reason: "title must not be empty".to_string(),
            });
        }
    }
    Ok(())
}
