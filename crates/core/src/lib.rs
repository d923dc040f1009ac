//! Phonotok-core - data model and vocabulary construction
//!
//! This crate provides the fundamental pieces for preparing character-level
//! vocabularies from pronunciation dictionaries: the record data model, the
//! dictionary line parser, and the vocabulary builder.
//!
//! # Features
//!
//! - Tab-separated dictionary line parsing with typed per-line errors
//! - Ordered record collections with grouping helpers
//! - Deterministic, code-point-sorted character vocabularies
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use phonotok_core::{Modality, VocabularyModel};
//!
//! // Build a spelling vocabulary from a handful of words
//! let model = VocabularyModel::from_texts("de", Modality::Spelling, ["Hallo", "Welt"]);
//! assert_eq!(model.symbol_count(), 7);
//! ```

pub mod error;
pub use error::{LexiconError, Result};

pub mod record;
pub use record::{parse_line, LineError, PronunciationRecord};

pub mod dataset;
pub use dataset::LanguageDataset;

pub mod vocab;
pub use vocab::{Modality, SpecialTokens, VocabularyModel};
