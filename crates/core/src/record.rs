//! Dictionary line parsing.
//!
//! Turns one raw `word<TAB>/pron1/, /pron2/` line into a structured
//! [`PronunciationRecord`], or a typed per-line error that callers report
//! and skip without aborting the surrounding load.

use compact_str::CompactString;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// One (word, pronunciation) entry tagged with its language code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PronunciationRecord {
    /// Orthographic word form, trimmed of surrounding whitespace
    pub word: CompactString,
    /// IPA pronunciation without the enclosing slashes
    pub pronunciation: CompactString,
    /// Language code (e.g. `de`, `en_US`)
    pub language: CompactString,
}

/// Why a dictionary line yielded no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    /// The line did not split into exactly `word<TAB>pronunciations`
    FieldCount(usize),
    /// No slash-delimited pronunciation span was found
    NoPronunciation,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::FieldCount(n) => {
                write!(f, "expected exactly 2 tab-separated fields, found {}", n)
            }
            LineError::NoPronunciation => {
                write!(f, "no slash-delimited pronunciation found")
            }
        }
    }
}

/// Matches one `/…/` pronunciation span. No nesting: a span ends at the
/// first closing slash.
fn pronunciation_span() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/([^/]+)/").expect("Invalid pronunciation pattern"))
}

/// Parse one dictionary line into a record.
///
/// The line is split on a single tab into `word` and a pronunciation field
/// holding one or more slash-delimited alternates. When several alternates
/// are present, the **last** one becomes the record's pronunciation — one
/// record per line. Symbols that occur only in earlier alternates therefore
/// never reach a vocabulary built from the output; downstream consumers
/// depend on this exact selection.
///
/// An empty word after trimming still yields a record; data-quality
/// reporting happens at validation time, not here.
pub fn parse_line(line: &str, language: &str) -> Result<PronunciationRecord, LineError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 2 {
        return Err(LineError::FieldCount(fields.len()));
    }

    let word = fields[0].trim();
    let pronunciation = pronunciation_span()
        .captures_iter(fields[1])
        .filter_map(|caps| {
            let span = caps.get(1)?.as_str().trim();
            (!span.is_empty()).then_some(span)
        })
        .last()
        .ok_or(LineError::NoPronunciation)?;

    Ok(PronunciationRecord {
        word: word.into(),
        pronunciation: pronunciation.into(),
        language: language.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pronunciation() {
        let record = parse_line("hello\t/həˈloʊ/", "en_US").unwrap();
        assert_eq!(record.word, "hello");
        assert_eq!(record.pronunciation, "həˈloʊ");
        assert_eq!(record.language, "en_US");
    }

    #[test]
    fn test_last_alternate_wins() {
        let record = parse_line("x\t/a/, /b/, /c/", "de").unwrap();
        assert_eq!(record.pronunciation, "c");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let first = parse_line("Hallo\t/ˈhaloː/, /ˈhalo/", "de").unwrap();
        let second = parse_line("Hallo\t/ˈhaloː/, /ˈhalo/", "de").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_tab_is_malformed() {
        assert_eq!(parse_line("hello /həˈloʊ/", "en"), Err(LineError::FieldCount(1)));
    }

    #[test]
    fn test_extra_tabs_are_malformed() {
        assert_eq!(
            parse_line("hello\t/həˈloʊ/\textra", "en"),
            Err(LineError::FieldCount(3))
        );
    }

    #[test]
    fn test_no_slash_span_is_malformed() {
        assert_eq!(parse_line("hello\thəˈloʊ", "en"), Err(LineError::NoPronunciation));
        assert_eq!(parse_line("hello\t/unterminated", "en"), Err(LineError::NoPronunciation));
    }

    #[test]
    fn test_word_is_trimmed() {
        let record = parse_line("  Straße \t/ˈʃtraːsə/", "de").unwrap();
        assert_eq!(record.word, "Straße");
    }

    #[test]
    fn test_empty_word_still_yields_record() {
        let record = parse_line("\t/ə/", "en").unwrap();
        assert_eq!(record.word, "");
        assert_eq!(record.pronunciation, "ə");
    }

    #[test]
    fn test_blank_alternates_are_skipped() {
        // "/ /" trims to empty and is not a usable alternate
        let record = parse_line("x\t/a/, / /", "en").unwrap();
        assert_eq!(record.pronunciation, "a");
    }

    #[test]
    fn test_alternate_whitespace_is_trimmed() {
        let record = parse_line("x\t/ hə loʊ /", "en").unwrap();
        assert_eq!(record.pronunciation, "hə loʊ");
    }
}
