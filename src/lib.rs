//! Lifeboat - Titanic survival classification pipeline
//!
//! A single linear pipeline over a small categorical dataset:
//! - Parse quoted CSV lines into labeled passenger records
//! - Split records into train/test subsets with a seeded assignment
//! - Train a decision tree and a logistic regression
//! - Report accuracy on the held-out subset
//!
//! # Modules
//!
//! - [`dataset`] - Vocabularies, record parsing, CSV reading, splitting
//! - [`training`] - The two classifiers behind the [`training::Classifier`] trait
//! - [`evaluate`] - Accuracy and confusion counts on held-out records
//! - [`pipeline`] - End-to-end run producing a serializable report
//! - [`cli`] - Command-line interface

// Core error handling
pub mod error;

// Pipeline stages
pub mod dataset;
pub mod training;
pub mod evaluate;
pub mod pipeline;

// Services
pub mod cli;

pub use error::{LifeboatError, Result};

/// Re-export commonly used types
pub mod prelude {
    // Error handling
    pub use crate::error::{LifeboatError, Result};

    // Dataset
    pub use crate::dataset::{
        read_csv, to_matrices, train_test_split, AgeGroup, DatasetSummary, Gender,
        PassengerRecord, SplitConfig, Survival, TicketClass, TrainTestSplit,
    };

    // Training
    pub use crate::training::{Classifier, Criterion, DecisionTree, LogisticRegression};

    // Evaluation
    pub use crate::evaluate::{evaluate, score, Evaluation};

    // Pipeline
    pub use crate::pipeline::{run, ModelReport, PipelineConfig, PipelineReport};
}
