//! Character-level codec over a persisted vocabulary.
//!
//! A [`CharTokenizer`] turns text into integer id sequences and back. Its
//! mapping tables are private and immutable after construction, so
//! independent instances are safe for concurrent read-only use.

use crate::io::load::{load_vocabulary, LoadedVocabulary};
use ahash::AHashMap;
use compact_str::CompactString;
use phonotok_core::{Result, SpecialTokens, VocabularyModel};
use std::path::Path;

/// Fixed id of the padding token.
pub const PAD_ID: u32 = 0;
/// Fixed id of the start-of-sequence token.
pub const SOS_ID: u32 = 1;
/// Fixed id of the end-of-sequence token.
pub const EOS_ID: u32 = 2;
/// Fixed id of the unknown token.
pub const UNK_ID: u32 = 3;

/// Character tokenizer backed by a persisted vocabulary.
///
/// The full vocabulary list is `[pad, sos, eos, unk]` followed by the
/// symbols in their persisted order, so the special-token ids 0-3 hold by
/// position regardless of symbol-set size.
pub struct CharTokenizer {
    language: String,
    modality: String,
    /// Full vocabulary list: id -> token string
    tokens: Vec<CompactString>,
    /// Single characters -> id
    char_to_id: AHashMap<char, u32>,
    /// Special token strings (cached for decode fallback)
    special: SpecialTokens,
}

impl CharTokenizer {
    /// Construct a codec from an in-memory vocabulary model.
    pub fn from_model(model: &VocabularyModel) -> Self {
        Self::build(
            model.language.clone(),
            model.modality.to_string(),
            model.symbols.iter().map(|&c| CompactString::from(c.to_string())),
            model.special_tokens.clone(),
        )
    }

    /// Load a codec from a persisted vocabulary JSON file.
    ///
    /// # Errors
    /// Returns `MissingVocabularyFile` if the file does not exist and
    /// `MalformedVocabulary` if `vocab` or any of the four special-token
    /// entries is missing.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let LoadedVocabulary {
            language,
            modality,
            symbols,
            special_tokens,
        } = load_vocabulary(path.as_ref())?;

        Ok(Self::build(language, modality, symbols, special_tokens))
    }

    fn build(
        language: String,
        modality: String,
        symbols: impl IntoIterator<Item = CompactString>,
        special: SpecialTokens,
    ) -> Self {
        let mut tokens: Vec<CompactString> = vec![
            special.pad.as_str().into(),
            special.sos.as_str().into(),
            special.eos.as_str().into(),
            special.unk.as_str().into(),
        ];

        let mut char_to_id = AHashMap::new();
        for symbol in symbols {
            let id = tokens.len() as u32;
            let mut chars = symbol.chars();
            // Only single-character entries are encodable; anything longer
            // stays decodable through the id -> token table.
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                char_to_id.entry(ch).or_insert(id);
            }
            tokens.push(symbol);
        }

        Self {
            language,
            modality,
            tokens,
            char_to_id,
            special,
        }
    }

    /// Encode text into token ids.
    ///
    /// Characters absent from the vocabulary map to [`UNK_ID`]. With
    /// `add_special_tokens`, the result is framed by [`SOS_ID`] and
    /// [`EOS_ID`]; padding is never inserted here — sizing batches is the
    /// caller's concern.
    pub fn encode(&self, text: &str, add_special_tokens: bool) -> Vec<u32> {
        let mut ids = Vec::new();

        if add_special_tokens {
            ids.push(SOS_ID);
        }

        ids.extend(
            text.chars()
                .map(|c| self.char_to_id.get(&c).copied().unwrap_or(UNK_ID)),
        );

        if add_special_tokens {
            ids.push(EOS_ID);
        }

        ids
    }

    /// Decode token ids back into text.
    ///
    /// Ids outside the table render as the unknown-token literal. With
    /// `skip_special_tokens`, pad/sos/eos are omitted — the unknown token is
    /// **not**: it stands for real input content, where the others are
    /// purely structural.
    pub fn decode(&self, ids: &[u32], skip_special_tokens: bool) -> String {
        let mut text = String::new();

        for &id in ids {
            if skip_special_tokens && matches!(id, PAD_ID | SOS_ID | EOS_ID) {
                continue;
            }
            match self.tokens.get(id as usize) {
                Some(token) => text.push_str(token),
                None => text.push_str(&self.special.unk),
            }
        }

        text
    }

    /// Total number of ids, special tokens included. Stable for a given
    /// persisted vocabulary; used externally to size embedding tables.
    pub fn vocab_size(&self) -> usize {
        self.tokens.len()
    }

    /// Language code this codec was built for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Modality label this codec was built for.
    pub fn modality(&self) -> &str {
        &self.modality
    }

    /// The special token strings.
    pub fn special_tokens(&self) -> &SpecialTokens {
        &self.special
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonotok_core::Modality;

    fn codec_for(texts: &[&str]) -> CharTokenizer {
        let model = VocabularyModel::from_texts("de", Modality::Spelling, texts.iter().copied());
        CharTokenizer::from_model(&model)
    }

    #[test]
    fn test_round_trip_without_special_tokens() {
        let codec = codec_for(&["Hallo", "Straße"]);
        let text = "HalloStraße";
        let ids = codec.encode(text, false);
        assert_eq!(codec.decode(&ids, false), text);
    }

    #[test]
    fn test_round_trip_with_special_tokens() {
        let codec = codec_for(&["Hallo"]);
        let ids = codec.encode("Hallo", true);
        assert_eq!(codec.decode(&ids, true), "Hallo");
    }

    #[test]
    fn test_special_token_ids_are_positional() {
        let codec = codec_for(&["abc"]);
        assert_eq!(codec.encode("", true), vec![SOS_ID, EOS_ID]);
        assert_eq!(SOS_ID, 1);
        assert_eq!(EOS_ID, 2);
    }

    #[test]
    fn test_unknown_character_maps_to_unk() {
        let codec = codec_for(&["ab"]);
        let ids = codec.encode("axb", false);
        assert_eq!(ids[1], UNK_ID);
    }

    #[test]
    fn test_unk_survives_skip_special_tokens() {
        let codec = codec_for(&["ab"]);
        let ids = codec.encode("axb", true);
        // pad/sos/eos are structural and skipped; the unknown placeholder
        // stands for real input and is kept.
        assert_eq!(codec.decode(&ids, true), "a<UNK>b");
    }

    #[test]
    fn test_out_of_range_id_decodes_to_unk_literal() {
        let codec = codec_for(&["a"]);
        assert_eq!(codec.decode(&[9999], true), "<UNK>");
    }

    #[test]
    fn test_symbol_ids_start_after_special_tokens() {
        let codec = codec_for(&["ba"]);
        // Symbols are sorted, so 'a' is the first symbol at id 4.
        assert_eq!(codec.encode("a", false), vec![4]);
        assert_eq!(codec.encode("b", false), vec![5]);
    }

    #[test]
    fn test_vocab_size_counts_special_tokens() {
        let codec = codec_for(&["abc"]);
        assert_eq!(codec.vocab_size(), 7);
    }

    #[test]
    fn test_pad_is_never_emitted_by_encode() {
        let codec = codec_for(&["ab"]);
        let ids = codec.encode("ab", true);
        assert!(!ids.contains(&PAD_ID));
    }
}
