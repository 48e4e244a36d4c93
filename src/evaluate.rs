//! Model evaluation on held-out records
//!
//! Pairs each prediction with its true label and reports accuracy plus
//! the 2x2 confusion counts.

use crate::dataset::record::{to_matrices, PassengerRecord};
use crate::error::{LifeboatError, Result};
use crate::training::Classifier;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Scores of one model on a test set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub model: String,
    pub n_test: usize,
    /// Fraction of test records predicted correctly, in [0, 1]
    pub accuracy: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

/// Apply a trained model to the test records and score its predictions.
pub fn evaluate(model: &dyn Classifier, test: &[PassengerRecord]) -> Result<Evaluation> {
    if test.is_empty() {
        return Err(LifeboatError::Validation(
            "cannot evaluate on an empty test set".to_string(),
        ));
    }

    let (x, y) = to_matrices(test)?;
    let predictions = model.predict(&x)?;
    score(model.name(), &y, &predictions)
}

/// Accuracy and confusion counts from paired labels and predictions.
pub fn score(model: &str, y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Result<Evaluation> {
    if y_true.len() != y_pred.len() {
        return Err(LifeboatError::Shape {
            expected: format!("{} predictions", y_true.len()),
            actual: format!("{} predictions", y_pred.len()),
        });
    }
    if y_true.is_empty() {
        return Err(LifeboatError::Validation(
            "cannot score an empty prediction set".to_string(),
        ));
    }

    let mut true_positives = 0;
    let mut false_positives = 0;
    let mut true_negatives = 0;
    let mut false_negatives = 0;

    for (t, p) in y_true.iter().zip(y_pred.iter()) {
        match (*t > 0.5, *p > 0.5) {
            (true, true) => true_positives += 1,
            (false, true) => false_positives += 1,
            (false, false) => true_negatives += 1,
            (true, false) => false_negatives += 1,
        }
    }

    let correct = true_positives + true_negatives;
    Ok(Evaluation {
        model: model.to_string(),
        n_test: y_true.len(),
        accuracy: correct as f64 / y_true.len() as f64,
        true_positives,
        false_positives,
        true_negatives,
        false_negatives,
    })
}
