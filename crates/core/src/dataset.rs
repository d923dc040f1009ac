//! Loaded pronunciation collections.
//!
//! A [`LanguageDataset`] holds parsed records in input order together with
//! the diagnostics accumulated while loading. Record order equals line
//! order; file order equals directory-listing order and is not sorted.

use crate::record::PronunciationRecord;
use ahash::{AHashMap, AHashSet};

/// Ordered collection of pronunciation records from one or more source files.
#[derive(Debug, Clone, Default)]
pub struct LanguageDataset {
    records: Vec<PronunciationRecord>,
    warnings: Vec<String>,
}

impl LanguageDataset {
    /// Create a dataset from parsed records and accumulated load warnings.
    pub fn new(records: Vec<PronunciationRecord>, warnings: Vec<String>) -> Self {
        Self { records, warnings }
    }

    /// All records, in file-then-line order.
    pub fn records(&self) -> &[PronunciationRecord] {
        &self.records
    }

    /// Diagnostic messages for lines that were skipped during loading.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterator over the orthographic word forms.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.word.as_str())
    }

    /// Iterator over the pronunciation strings.
    pub fn pronunciations(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.pronunciation.as_str())
    }

    /// Distinct language codes, in first-seen order.
    pub fn languages(&self) -> Vec<String> {
        let mut seen = AHashSet::new();
        let mut languages = Vec::new();
        for record in &self.records {
            if seen.insert(record.language.as_str()) {
                languages.push(record.language.to_string());
            }
        }
        languages
    }

    /// Entry counts grouped by language code, in first-seen order.
    pub fn language_counts(&self) -> Vec<(String, usize)> {
        let mut order = Vec::new();
        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        for record in &self.records {
            if !counts.contains_key(record.language.as_str()) {
                order.push(record.language.to_string());
            }
            *counts.entry(record.language.as_str()).or_insert(0) += 1;
        }
        order
            .into_iter()
            .map(|language| {
                let count = counts[language.as_str()];
                (language, count)
            })
            .collect()
    }

    /// (word, pronunciation) pairs for one language, in input order.
    pub fn word_pairs(&self, language: &str) -> Vec<(String, String)> {
        self.records
            .iter()
            .filter(|r| r.language.as_str() == language)
            .map(|r| (r.word.to_string(), r.pronunciation.to_string()))
            .collect()
    }
}
