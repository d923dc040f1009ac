//! On-disk layout of persisted vocabulary files.
//!
//! The persisted format is a single JSON object:
//!
//! ```json
//! { "language": "de", "modality": "spelling",
//!   "vocab": ["a", "b", "ß"],
//!   "special_tokens": { "pad": "<PAD>", "sos": "<SOS>", "eos": "<EOS>", "unk": "<UNK>" } }
//! ```
//!
//! Every field is optional at the serde level so loading can report exactly
//! which required field is missing instead of a generic parse failure.

use phonotok_core::Modality;
use serde::{Deserialize, Serialize};

/// Raw persisted vocabulary, before required-field validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedVocabulary {
    pub language: Option<String>,
    pub modality: Option<String>,
    pub vocab: Option<Vec<String>>,
    pub special_tokens: Option<SerializedSpecialTokens>,
}

/// Special tokens as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedSpecialTokens {
    pub pad: Option<String>,
    pub sos: Option<String>,
    pub eos: Option<String>,
    pub unk: Option<String>,
}

/// File name consumed by downstream tooling: `{language}_{modality}.json`.
pub fn vocabulary_filename(language: &str, modality: Modality) -> String {
    format!("{}_{}.json", language, modality)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_filename() {
        assert_eq!(vocabulary_filename("de", Modality::Spelling), "de_spelling.json");
        assert_eq!(vocabulary_filename("en_US", Modality::Ipa), "en_US_ipa.json");
    }

    #[test]
    fn test_partial_document_deserializes() {
        let raw: SerializedVocabulary = serde_json::from_str(r#"{"vocab": ["a"]}"#).unwrap();
        assert_eq!(raw.vocab.as_deref(), Some(&["a".to_string()][..]));
        assert!(raw.language.is_none());
        assert!(raw.special_tokens.is_none());
    }
}
