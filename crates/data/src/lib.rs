//! Phonotok-data - dataset loading and validation
//!
//! This crate ingests pronunciation dictionaries through a format-adapter
//! seam, validates the loaded collections, and samples reproducible
//! train/validation/test splits.
//!
//! # Features
//!
//! - `DataAdapter` trait with an ipa-dict implementation
//! - Warn-and-continue line handling; structural problems abort
//! - Validation reports with summary statistics and an IPA allow-list scan
//! - Seed-deterministic split sampling
//!
//! # Example
//!
//! ```no_run
//! use phonotok_data::{DataAdapter, IpaDictAdapter};
//!
//! let adapter = IpaDictAdapter::new("data/de.txt");
//! let (dataset, report) = adapter.load_validated()?;
//! println!("{} entries, {} warnings", dataset.len(), report.warnings.len());
//! # Ok::<(), phonotok_core::LexiconError>(())
//! ```

// Re-export core types
pub use phonotok_core::{LanguageDataset, LexiconError, PronunciationRecord, Result};

pub mod adapter;
pub use adapter::DataAdapter;

pub mod ipa_dict;
pub use ipa_dict::IpaDictAdapter;

pub mod validation;
pub use validation::{validate_dataset, DatasetStats, ValidationReport};

pub mod splits;
pub use splits::{create_splits, DatasetSplits, SplitRatios};
