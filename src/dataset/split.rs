//! Seeded train/test splitting
//!
//! Assignment is probabilistic: one uniform draw per record, compared
//! against the train fraction. Subset sizes therefore only approximate the
//! configured ratio, but the assignment is fully deterministic for a fixed
//! seed and input order.

use crate::dataset::record::PassengerRecord;
use crate::error::{LifeboatError, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Configuration for the train/test split
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Target fraction of records assigned to training, in (0, 1)
    pub train_fraction: f64,
    /// Seed for the per-record draws
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_fraction: 0.7,
            seed: 42,
        }
    }
}

impl SplitConfig {
    pub fn new(train_fraction: f64, seed: u64) -> Self {
        Self {
            train_fraction,
            seed,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.train_fraction.is_finite()
            || self.train_fraction <= 0.0
            || self.train_fraction >= 1.0
        {
            return Err(LifeboatError::Validation(format!(
                "train_fraction must be in (0, 1), got {}",
                self.train_fraction
            )));
        }
        Ok(())
    }
}

/// Disjoint train/test subsets, each preserving input order
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub train: Vec<PassengerRecord>,
    pub test: Vec<PassengerRecord>,
}

impl TrainTestSplit {
    pub fn n_train(&self) -> usize {
        self.train.len()
    }

    pub fn n_test(&self) -> usize {
        self.test.len()
    }
}

/// Split records into train/test subsets with one seeded draw per record.
pub fn train_test_split(
    records: &[PassengerRecord],
    config: &SplitConfig,
) -> Result<TrainTestSplit> {
    config.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let expected_train = (records.len() as f64 * config.train_fraction) as usize;
    let mut train = Vec::with_capacity(expected_train);
    let mut test = Vec::with_capacity(records.len() - expected_train);

    for record in records {
        if rng.gen::<f64>() < config.train_fraction {
            train.push(*record);
        } else {
            test.push(*record);
        }
    }

    Ok(TrainTestSplit { train, test })
}
