//! Serialization and deserialization for vocabulary files.
//!
//! This module reads and writes the persisted vocabulary JSON format and
//! owns the `{language}_{modality}.json` naming convention.

pub mod format;
pub mod load;
pub mod save;

pub use format::{vocabulary_filename, SerializedSpecialTokens, SerializedVocabulary};
pub use load::{load_vocabulary, LoadedVocabulary};
pub use save::save_vocabulary;
