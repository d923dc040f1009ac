//! Load functionality for persisted vocabularies.

use super::format::SerializedVocabulary;
use compact_str::CompactString;
use phonotok_core::{LexiconError, Result, SpecialTokens};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A persisted vocabulary after required-field validation.
///
/// `language` and `modality` are labels only and default to `"unknown"`
/// when the file omits them; `vocab` and the four special-token entries are
/// required.
#[derive(Debug, Clone)]
pub struct LoadedVocabulary {
    pub language: String,
    pub modality: String,
    pub symbols: Vec<CompactString>,
    pub special_tokens: SpecialTokens,
}

fn malformed(path: &Path, reason: impl Into<String>) -> LexiconError {
    LexiconError::MalformedVocabulary {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Load and validate a vocabulary JSON file.
///
/// # Errors
/// - `MissingVocabularyFile` if `path` does not exist
/// - `MalformedVocabulary` if the JSON is unreadable, or `vocab` or any of
///   the four special-token entries is missing (the offending field is
///   named in the message)
pub fn load_vocabulary(path: &Path) -> Result<LoadedVocabulary> {
    if !path.exists() {
        return Err(LexiconError::MissingVocabularyFile {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|err| LexiconError::Io {
        path: path.to_path_buf(),
        err,
    })?;

    let reader = BufReader::new(file);
    let raw: SerializedVocabulary =
        serde_json::from_reader(reader).map_err(|e| malformed(path, e.to_string()))?;

    let symbols = raw
        .vocab
        .ok_or_else(|| malformed(path, "missing field `vocab`"))?
        .into_iter()
        .map(CompactString::from)
        .collect();

    let special = raw
        .special_tokens
        .ok_or_else(|| malformed(path, "missing field `special_tokens`"))?;
    let special_tokens = SpecialTokens {
        pad: special
            .pad
            .ok_or_else(|| malformed(path, "missing special token `pad`"))?,
        sos: special
            .sos
            .ok_or_else(|| malformed(path, "missing special token `sos`"))?,
        eos: special
            .eos
            .ok_or_else(|| malformed(path, "missing special token `eos`"))?,
        unk: special
            .unk
            .ok_or_else(|| malformed(path, "missing special token `unk`"))?,
    };

    Ok(LoadedVocabulary {
        language: raw.language.unwrap_or_else(|| "unknown".to_string()),
        modality: raw.modality.unwrap_or_else(|| "unknown".to_string()),
        symbols,
        special_tokens,
    })
}
