//! Vocabulary model and character extraction.
//!
//! A [`VocabularyModel`] is the persisted unit consumed by the codec: the
//! distinct characters of one text channel for one language, plus the four
//! fixed structural tokens.

use crate::error::{LexiconError, Result};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which text channel a vocabulary describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// Orthographic word form
    Spelling,
    /// Phonetic pronunciation string
    Ipa,
}

impl Modality {
    /// The lowercase name used in filenames and persisted files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Spelling => "spelling",
            Modality::Ipa => "ipa",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modality {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "spelling" => Ok(Modality::Spelling),
            "ipa" => Ok(Modality::Ipa),
            other => Err(LexiconError::InvalidModality(other.to_string())),
        }
    }
}

/// The four fixed structural tokens present in every vocabulary.
///
/// These are never derived from the scanned text: extraction works one
/// character at a time, so the multi-character literals below cannot arise
/// from it. The contract states this explicitly rather than relying on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTokens {
    pub pad: String,
    pub sos: String,
    pub eos: String,
    pub unk: String,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            pad: "<PAD>".to_string(),
            sos: "<SOS>".to_string(),
            eos: "<EOS>".to_string(),
            unk: "<UNK>".to_string(),
        }
    }
}

/// Persisted character vocabulary for one (language, modality) pair.
///
/// `symbols` holds no duplicates and is sorted by code point ascending;
/// building twice from the same input set yields byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyModel {
    pub language: String,
    pub modality: Modality,
    /// Distinct single characters, sorted by code point ascending
    #[serde(rename = "vocab")]
    pub symbols: Vec<char>,
    pub special_tokens: SpecialTokens,
}

impl VocabularyModel {
    /// Build a vocabulary by scanning a collection of strings.
    ///
    /// Every distinct character is collected by code point — combining
    /// diacritics count as characters of their own, independent of their
    /// base letter. Empty strings are skipped. Each call builds a complete
    /// replacement; there is no merging across calls.
    pub fn from_texts<'a, I>(language: &str, modality: Modality, texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = AHashSet::new();
        for text in texts {
            if text.is_empty() {
                continue;
            }
            seen.extend(text.chars());
        }

        let mut symbols: Vec<char> = seen.into_iter().collect();
        symbols.sort_unstable();

        Self {
            language: language.to_string(),
            modality,
            symbols,
            special_tokens: SpecialTokens::default(),
        }
    }

    /// Number of distinct characters, excluding special tokens.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Total vocabulary size including the four special tokens.
    pub fn vocab_size(&self) -> usize {
        self.symbols.len() + 4
    }
}
