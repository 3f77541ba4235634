//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// A content record failed validation when the store was loaded
    #[error("Invalid {list} record at index {index}: {reason}")]
    InvalidRecord {
        list: &'static str,
        index: usize,
        reason: String,
    },

    /// A record index did not name a record in its list
    #[error("Record index {index} out of range ({len} records)")]
    RecordOutOfRange { index: usize, len: usize },

    /// Error during serialization/deserialization of embedded content or config
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A contact form submission is already in flight
    #[error("A submission is already pending")]
    SubmissionPending,
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
