//! Data-source adapter seam.

use crate::validation::ValidationReport;
use phonotok_core::{LanguageDataset, LexiconError, Result};

/// A source of pronunciation records in some external format.
///
/// Implementations load raw source material into a [`LanguageDataset`] and
/// judge the result; additional dictionary formats become additional
/// conforming types. Per-line problems are warnings and never abort a load,
/// while structural problems (missing path, empty result set) do.
pub trait DataAdapter {
    /// Load and parse the source into an ordered dataset.
    fn load(&self) -> Result<LanguageDataset>;

    /// Validate a loaded dataset, producing statistics and warnings.
    fn validate(&self, dataset: &LanguageDataset) -> ValidationReport;

    /// Load, then validate, failing if the dataset does not satisfy the
    /// schema. Warnings do not fail; only report-level errors do.
    fn load_validated(&self) -> Result<(LanguageDataset, ValidationReport)> {
        let dataset = self.load()?;
        let report = self.validate(&dataset);
        if !report.is_valid {
            return Err(LexiconError::SchemaValidation(report.errors.join("; ")));
        }
        Ok((dataset, report))
    }
}
