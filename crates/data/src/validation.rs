//! Dataset validation and summary statistics.
//!
//! Validation never rejects data: it produces a report with counts and
//! warnings so callers can judge quality before building vocabularies.

use ahash::AHashSet;
use phonotok_core::LanguageDataset;
use std::sync::OnceLock;

/// Characters pre-approved for pronunciation strings: Latin letters, the
/// IPA vowel and consonant letters, click letters, superscript modifiers,
/// stress/length marks, tone letters, prosodic punctuation, and the common
/// combining diacritics (nasalization, voicing, articulation marks).
/// Anything outside this set triggers a warning, never a rejection.
const ALLOWED_PRONUNCIATION_CHARS: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz ",
    "ɑæɒɔəɛɪɯɵʉʊʌʏɐɜɞɘɚɤɨyøœɶ",
    "ɓɗɖɢɠɡɦɥɧʜɲɴŋɳɸɰɹɻɺɾɽʋʍwɕ",
    "ʀʁɬɭɫʃʧʤʒʑʐʝʎʟʢʡʔʘǀǃǁǂɱ",
    "βfvθðszʂçɣχħʕ",
    "ʰʱʲʷˠˤⁿˡʼ",
    "ˈˌːˑ",
    "˥˦˧˨˩↗↘",
    ".|‖‿",
    "\u{0300}\u{0301}\u{0302}\u{0303}\u{0304}\u{0306}\u{030A}\u{030C}",
    "\u{031C}\u{031F}\u{0320}\u{0324}\u{0325}\u{0329}\u{032A}\u{032C}",
    "\u{032E}\u{032F}\u{0330}\u{0339}\u{033A}\u{033B}\u{033C}\u{033D}",
);

fn allowed_chars() -> &'static AHashSet<char> {
    static SET: OnceLock<AHashSet<char>> = OnceLock::new();
    SET.get_or_init(|| ALLOWED_PRONUNCIATION_CHARS.chars().collect())
}

/// Summary statistics over a loaded dataset.
#[derive(Debug, Clone, Default)]
pub struct DatasetStats {
    pub total_entries: usize,
    pub unique_words: usize,
    pub unique_languages: usize,
    pub languages: Vec<String>,
    pub avg_word_length: f64,
    pub avg_pronunciation_length: f64,
}

/// Result of validating a loaded dataset.
///
/// `errors` makes the dataset unusable; `warnings` flag data-quality
/// findings that loading tolerates.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: DatasetStats,
}

/// Validate a dataset and compute its summary statistics.
pub fn validate_dataset(dataset: &LanguageDataset) -> ValidationReport {
    let errors: Vec<String> = Vec::new();
    let mut warnings = Vec::new();

    let languages = dataset.languages();
    let total = dataset.len();

    let unique_words = dataset.words().collect::<AHashSet<_>>().len();

    let word_chars: usize = dataset.words().map(|w| w.chars().count()).sum();
    let pronunciation_chars: usize = dataset
        .pronunciations()
        .map(|p| p.chars().count())
        .sum();

    let stats = DatasetStats {
        total_entries: total,
        unique_words,
        unique_languages: languages.len(),
        languages,
        avg_word_length: mean(word_chars, total),
        avg_pronunciation_length: mean(pronunciation_chars, total),
    };

    let empty_words = dataset.words().filter(|w| w.trim().is_empty()).count();
    if empty_words > 0 {
        warnings.push(format!("{} entries have empty words", empty_words));
    }

    let empty_pronunciations = dataset
        .pronunciations()
        .filter(|p| p.trim().is_empty())
        .count();
    if empty_pronunciations > 0 {
        warnings.push(format!(
            "{} entries have empty pronunciations",
            empty_pronunciations
        ));
    }

    let allowed = allowed_chars();
    let mut unusual: Vec<char> = dataset
        .pronunciations()
        .flat_map(|p| p.chars())
        .filter(|c| !allowed.contains(c))
        .collect::<AHashSet<_>>()
        .into_iter()
        .collect();
    unusual.sort_unstable();
    if !unusual.is_empty() {
        let listed: String = unusual.into_iter().collect();
        warnings.push(format!(
            "Found unusual characters in pronunciations: {}",
            listed
        ));
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        stats,
    }
}

fn mean(char_total: usize, entries: usize) -> f64 {
    if entries == 0 {
        0.0
    } else {
        char_total as f64 / entries as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonotok_core::PronunciationRecord;

    fn record(word: &str, pronunciation: &str) -> PronunciationRecord {
        PronunciationRecord {
            word: word.into(),
            pronunciation: pronunciation.into(),
            language: "de".into(),
        }
    }

    #[test]
    fn test_stats() {
        let dataset = LanguageDataset::new(
            vec![record("Hallo", "ˈhalo"), record("Welt", "vɛlt"), record("Hallo", "ˈhalo")],
            Vec::new(),
        );
        let report = validate_dataset(&dataset);

        assert!(report.is_valid);
        assert_eq!(report.stats.total_entries, 3);
        assert_eq!(report.stats.unique_words, 2);
        assert_eq!(report.stats.unique_languages, 1);
        assert_eq!(report.stats.languages, vec!["de"]);
        // (5 + 4 + 5) / 3
        assert!((report.stats.avg_word_length - 14.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_fields_warn() {
        let dataset = LanguageDataset::new(
            vec![record("", "ˈhalo"), record("Welt", "")],
            Vec::new(),
        );
        let report = validate_dataset(&dataset);

        assert!(report.is_valid);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("empty words")));
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("empty pronunciations")));
    }

    #[test]
    fn test_unusual_characters_warn_without_rejecting() {
        // Cyrillic is outside the IPA/Latin allow-list.
        let dataset = LanguageDataset::new(vec![record("x", "при")], Vec::new());
        let report = validate_dataset(&dataset);

        assert!(report.is_valid);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("unusual characters")));
    }

    #[test]
    fn test_clean_ipa_produces_no_warnings() {
        let dataset = LanguageDataset::new(
            vec![record("Straße", "ˈʃtraːsə"), record("bonjour", "bɔ̃ʒuʁ")],
            Vec::new(),
        );
        let report = validate_dataset(&dataset);

        assert!(report.is_valid);
        assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
    }

    #[test]
    fn test_empty_dataset_has_zero_means() {
        let report = validate_dataset(&LanguageDataset::default());
        assert_eq!(report.stats.avg_word_length, 0.0);
        assert_eq!(report.stats.avg_pronunciation_length, 0.0);
    }
}
