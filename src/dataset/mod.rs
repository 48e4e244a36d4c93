//! Passenger dataset handling
//!
//! Covers the data side of the pipeline:
//! - Categorical vocabularies and integer codes (schema)
//! - Line parsing into immutable records (record)
//! - CSV file reading with fail-fast validation (reader)
//! - Seeded probabilistic train/test splitting (split)

pub mod reader;
pub mod record;
pub mod schema;
pub mod split;

pub use reader::{read_csv, DatasetSummary};
pub use record::{to_matrices, PassengerRecord, FIELDS_PER_RECORD};
pub use schema::{AgeGroup, Gender, Survival, TicketClass, FEATURE_NAMES, N_FEATURES};
pub use split::{train_test_split, SplitConfig, TrainTestSplit};
