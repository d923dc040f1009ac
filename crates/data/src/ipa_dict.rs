//! Loader for ipa-dict formatted dictionaries.
//!
//! The ipa-dict format is UTF-8 text, one entry per line:
//!
//! ```text
//! word<TAB>/pron1/, /pron2/, ...
//! ```
//!
//! Blank lines are ignored. A single `.txt` file holds one language; a
//! directory holds one file per language, with the language code taken from
//! the file stem (`en_US.txt` → `en_US`, underscores preserved verbatim).

use crate::adapter::DataAdapter;
use crate::validation::{validate_dataset, ValidationReport};
use log::{info, warn};
use phonotok_core::{parse_line, LanguageDataset, LexiconError, PronunciationRecord, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// File extension recognized in directory mode.
const DICT_EXTENSION: &str = "txt";

/// Adapter for ipa-dict format datasets.
pub struct IpaDictAdapter {
    data_path: PathBuf,
    language_code: Option<String>,
}

impl IpaDictAdapter {
    /// Create an adapter for a dictionary file or a directory of language
    /// files. Language codes are derived from file stems.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            language_code: None,
        }
    }

    /// Create an adapter with an explicit language code.
    ///
    /// The override applies to single-file loads only; in directory mode
    /// every file keeps its stem-derived code.
    pub fn with_language_code(data_path: impl Into<PathBuf>, code: impl Into<String>) -> Self {
        Self {
            data_path: data_path.into(),
            language_code: Some(code.into()),
        }
    }

    /// The source path this adapter reads from.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Language codes this source can provide, one per matching file.
    pub fn available_languages(&self) -> Result<Vec<String>> {
        let single_file = self.data_path.is_file();
        Ok(self
            .source_files()?
            .iter()
            .map(|path| self.resolve_language(path, single_file))
            .collect())
    }

    fn resolve_language(&self, path: &Path, single_file: bool) -> String {
        if single_file {
            if let Some(code) = &self.language_code {
                return code.clone();
            }
        }
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Files to process, in directory-listing order (not sorted — callers
    /// must not rely on cross-file ordering).
    fn source_files(&self) -> Result<Vec<PathBuf>> {
        if !self.data_path.exists() {
            return Err(LexiconError::EmptySource(format!(
                "data path does not exist: {}",
                self.data_path.display()
            )));
        }

        if self.data_path.is_file() {
            return Ok(vec![self.data_path.clone()]);
        }

        let entries = fs::read_dir(&self.data_path).map_err(|err| LexiconError::Io {
            path: self.data_path.clone(),
            err,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| LexiconError::Io {
                path: self.data_path.clone(),
                err,
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(DICT_EXTENSION) {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(LexiconError::EmptySource(format!(
                "no .{} files found in directory: {}",
                DICT_EXTENSION,
                self.data_path.display()
            )));
        }

        Ok(files)
    }

    fn load_file(
        &self,
        path: &Path,
        language: &str,
        dataset: &mut Vec<PronunciationRecord>,
        warnings: &mut Vec<String>,
    ) -> Result<()> {
        let file = File::open(path).map_err(|err| LexiconError::Io {
            path: path.to_path_buf(),
            err,
        })?;

        info!("Loading {} as language '{}'", path.display(), language);

        let reader = BufReader::new(file);
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|err| LexiconError::Io {
                path: path.to_path_buf(),
                err,
            })?;

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match parse_line(line, language) {
                Ok(record) => dataset.push(record),
                Err(err) => {
                    let message =
                        format!("line {} in {}: {}", index + 1, path.display(), err);
                    warn!("Skipping {}", message);
                    warnings.push(message);
                }
            }
        }

        Ok(())
    }
}

impl DataAdapter for IpaDictAdapter {
    fn load(&self) -> Result<LanguageDataset> {
        let files = self.source_files()?;
        let single_file = self.data_path.is_file();

        let mut records = Vec::new();
        let mut warnings = Vec::new();

        for path in &files {
            let language = self.resolve_language(path, single_file);
            self.load_file(path, &language, &mut records, &mut warnings)?;
        }

        if records.is_empty() {
            return Err(LexiconError::EmptySource(format!(
                "no usable records found in: {}",
                self.data_path.display()
            )));
        }

        info!(
            "Loaded {} records from {} file(s), {} line(s) skipped",
            records.len(),
            files.len(),
            warnings.len()
        );

        Ok(LanguageDataset::new(records, warnings))
    }

    fn validate(&self, dataset: &LanguageDataset) -> ValidationReport {
        validate_dataset(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonotok_core::{Modality, VocabularyModel};
    use std::io::Write;

    fn write_dict(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_language_code_from_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dict(dir.path(), "en_US.txt", "hello\t/həˈloʊ/\n");

        let adapter = IpaDictAdapter::new(&path);
        let dataset = adapter.load().unwrap();

        assert_eq!(dataset.records()[0].language, "en_US");
        assert_eq!(adapter.available_languages().unwrap(), vec!["en_US"]);
    }

    #[test]
    fn test_explicit_language_code_overrides_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dict(dir.path(), "dictionary.txt", "hello\t/həˈloʊ/\n");

        let adapter = IpaDictAdapter::with_language_code(&path, "en");
        let dataset = adapter.load().unwrap();

        assert_eq!(dataset.records()[0].language, "en");
    }

    #[test]
    fn test_directory_mode_loads_all_txt_files() {
        let dir = tempfile::tempdir().unwrap();
        write_dict(dir.path(), "de.txt", "Hallo\t/ˈhalo/\n");
        write_dict(dir.path(), "fr.txt", "bonjour\t/bɔ̃ʒuʁ/\n");
        write_dict(dir.path(), "notes.md", "not a dictionary\n");

        let adapter = IpaDictAdapter::new(dir.path());
        let dataset = adapter.load().unwrap();

        assert_eq!(dataset.len(), 2);
        let mut languages = dataset.languages();
        languages.sort();
        assert_eq!(languages, vec!["de", "fr"]);
    }

    #[test]
    fn test_directory_mode_ignores_language_override() {
        let dir = tempfile::tempdir().unwrap();
        write_dict(dir.path(), "de.txt", "Hallo\t/ˈhalo/\n");

        let adapter = IpaDictAdapter::with_language_code(dir.path(), "xx");
        let dataset = adapter.load().unwrap();

        assert_eq!(dataset.records()[0].language, "de");
    }

    #[test]
    fn test_missing_path_is_empty_source() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = IpaDictAdapter::new(dir.path().join("absent"));
        assert!(matches!(
            adapter.load(),
            Err(LexiconError::EmptySource(_))
        ));
    }

    #[test]
    fn test_directory_without_txt_files_is_empty_source() {
        let dir = tempfile::tempdir().unwrap();
        write_dict(dir.path(), "readme.md", "nothing here\n");

        let adapter = IpaDictAdapter::new(dir.path());
        assert!(matches!(
            adapter.load(),
            Err(LexiconError::EmptySource(_))
        ));
    }

    #[test]
    fn test_zero_usable_records_is_empty_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dict(dir.path(), "de.txt", "malformed line\nanother one\n");

        let adapter = IpaDictAdapter::new(&path);
        assert!(matches!(
            adapter.load(),
            Err(LexiconError::EmptySource(_))
        ));
    }

    #[test]
    fn test_malformed_lines_warn_and_continue() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dict(
            dir.path(),
            "de.txt",
            "Hallo\t/ˈhalo/\nno tab here\nWelt\tno slashes\nStraße\t/ˈʃtraːsə/\n",
        );

        let adapter = IpaDictAdapter::new(&path);
        let dataset = adapter.load().unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.warnings().len(), 2);
        assert!(dataset.warnings()[0].contains("line 2"));
        assert!(dataset.warnings()[1].contains("line 3"));
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dict(dir.path(), "de.txt", "\nHallo\t/ˈhalo/\n\n\n");

        let adapter = IpaDictAdapter::new(&path);
        let dataset = adapter.load().unwrap();

        assert_eq!(dataset.len(), 1);
        assert!(dataset.warnings().is_empty());
    }

    #[test]
    fn test_german_end_to_end_vocabularies() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dict(
            dir.path(),
            "de.txt",
            "Straße\t/ˈʃtraːsə/\nHallo\t/ˈhaloː/, /ˈhalo/\n",
        );

        let adapter = IpaDictAdapter::with_language_code(&path, "de");
        let dataset = adapter.load().unwrap();

        // The last alternate wins, so line two contributes "ˈhalo".
        let pronunciations: Vec<&str> = dataset.pronunciations().collect();
        assert_eq!(pronunciations, vec!["ˈʃtraːsə", "ˈhalo"]);

        let spelling = VocabularyModel::from_texts("de", Modality::Spelling, dataset.words());
        for ch in ['H', 'S', 'a', 'e', 'l', 'o', 'r', 't', 'ß'] {
            assert!(spelling.symbols.contains(&ch), "missing {ch:?}");
        }

        let ipa =
            VocabularyModel::from_texts("de", Modality::Ipa, dataset.pronunciations());
        for ch in ['ˈ', 'ʃ', 't', 'r', 'a', 'ː', 's', 'ə', 'h', 'l', 'o'] {
            assert!(ipa.symbols.contains(&ch), "missing {ch:?}");
        }
    }

    #[test]
    fn test_symbols_unique_to_earlier_alternates_are_excluded() {
        let dir = tempfile::tempdir().unwrap();
        // The length mark appears only in the first alternate, which the
        // selection policy discards.
        let path = write_dict(dir.path(), "de.txt", "Hallo\t/ˈhaloː/, /ˈhalo/\n");

        let adapter = IpaDictAdapter::with_language_code(&path, "de");
        let dataset = adapter.load().unwrap();

        let ipa =
            VocabularyModel::from_texts("de", Modality::Ipa, dataset.pronunciations());
        assert!(!ipa.symbols.contains(&'ː'));
    }
}
