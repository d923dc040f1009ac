//! Seeded train/validation/test splitting.

use phonotok_core::{LanguageDataset, LexiconError, PronunciationRecord, Result};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Partition proportions. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitRatios {
    pub train: f64,
    pub validation: f64,
    pub test: f64,
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self {
            train: 0.8,
            validation: 0.1,
            test: 0.1,
        }
    }
}

impl SplitRatios {
    fn validate(&self) -> Result<()> {
        let sum = self.train + self.validation + self.test;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(LexiconError::InvalidSplit(format!(
                "ratios must sum to 1.0, got {}",
                sum
            )));
        }
        if self.train < 0.0 || self.validation < 0.0 || self.test < 0.0 {
            return Err(LexiconError::InvalidSplit(
                "ratios must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// The three partitions produced by [`create_splits`].
#[derive(Debug, Clone)]
pub struct DatasetSplits {
    pub train: LanguageDataset,
    pub validation: LanguageDataset,
    pub test: LanguageDataset,
}

/// Shuffle a dataset with a seeded generator and partition it.
///
/// The same (dataset, ratios, seed) triple always produces the same
/// partitions. Load warnings stay with the source dataset and are not
/// carried into the splits.
pub fn create_splits(
    dataset: &LanguageDataset,
    ratios: SplitRatios,
    seed: u64,
) -> Result<DatasetSplits> {
    ratios.validate()?;

    let mut records: Vec<PronunciationRecord> = dataset.records().to_vec();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    records.shuffle(&mut rng);

    let n_total = records.len();
    let n_train = (n_total as f64 * ratios.train) as usize;
    let n_validation = (n_total as f64 * ratios.validation) as usize;

    let mut rest = records.split_off(n_train.min(n_total));
    let test = rest.split_off(n_validation.min(rest.len()));

    Ok(DatasetSplits {
        train: LanguageDataset::new(records, Vec::new()),
        validation: LanguageDataset::new(rest, Vec::new()),
        test: LanguageDataset::new(test, Vec::new()),
    })
}
