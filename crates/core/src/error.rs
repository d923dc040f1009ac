//! Error types for the phonotok libraries.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type shared by the dataset and tokenizer crates.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// The source path is missing, matches no files, or yields no records
    #[error("Empty source: {0}")]
    EmptySource(String),

    /// A loaded collection failed schema validation
    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    /// A persisted vocabulary file does not exist
    #[error("Vocabulary file not found: {}", .path.display())]
    MissingVocabularyFile { path: PathBuf },

    /// A persisted vocabulary is missing required fields or is unreadable
    #[error("Malformed vocabulary in {}: {reason}", .path.display())]
    MalformedVocabulary { path: PathBuf, reason: String },

    /// Modality string was neither `spelling` nor `ipa`
    #[error("Modality must be 'spelling' or 'ipa', got '{0}'")]
    InvalidModality(String),

    /// Split ratios do not describe a valid partition
    #[error("Invalid split ratios: {0}")]
    InvalidSplit(String),

    /// I/O error with file context
    #[error("I/O error for {}: {err}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for phonotok operations.
pub type Result<T> = std::result::Result<T, LexiconError>;
