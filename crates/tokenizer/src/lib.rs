//! Phonotok-tokenizer - character codec and vocabulary persistence
//!
//! This crate turns persisted character vocabularies into a bidirectional
//! text ↔ id codec with exact round-trip semantics.
//!
//! # Features
//!
//! - Fixed special-token ids: pad=0, sos=1, eos=2, unk=3
//! - Unknown characters encode to the unk id; unknown ids decode to the
//!   unk literal
//! - Vocabulary JSON save/load with required-field validation
//!
//! # Example
//!
//! ```rust
//! use phonotok_core::{Modality, VocabularyModel};
//! use phonotok_tokenizer::CharTokenizer;
//!
//! let model = VocabularyModel::from_texts("de", Modality::Spelling, ["hallo"]);
//! let codec = CharTokenizer::from_model(&model);
//!
//! let ids = codec.encode("hallo", true);
//! assert_eq!(codec.decode(&ids, true), "hallo");
//! ```

// Re-export core types
pub use phonotok_core::{LexiconError, Modality, Result, SpecialTokens, VocabularyModel};

// Codec API
pub mod codec;
pub use codec::{CharTokenizer, EOS_ID, PAD_ID, SOS_ID, UNK_ID};

// IO/Serialization
pub mod io;
pub use io::{load_vocabulary, save_vocabulary, vocabulary_filename};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
