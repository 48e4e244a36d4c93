//! Classifier training module
//!
//! Two binary classifiers behind a common trait:
//! - Decision tree (gini or entropy splits)
//! - Logistic regression (batch gradient descent)
//!
//! The pipeline and evaluator only see the [`Classifier`] trait; how a
//! model trains is opaque to them.

pub mod decision_tree;
pub mod logistic;

pub use decision_tree::{Criterion, DecisionTree, TreeNode};
pub use logistic::LogisticRegression;

use crate::error::{LifeboatError, Result};
use ndarray::{Array1, Array2};

/// Trait for binary classifiers
pub trait Classifier: Send + Sync {
    /// Fit the model to training data
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<()>;

    /// Predict a 0.0/1.0 label per row
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>>;

    /// Display name for reports
    fn name(&self) -> &'static str;

    /// Normalized feature importances (if the model exposes them)
    fn feature_importances(&self) -> Option<Array1<f64>> {
        None
    }
}

/// Shared fit-time checks: x and y must agree in length and y must be
/// strictly 0.0/1.0.
pub(crate) fn validate_fit_inputs(x: &Array2<f64>, y: &Array1<f64>) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(LifeboatError::Shape {
            expected: format!("y length = {}", x.nrows()),
            actual: format!("y length = {}", y.len()),
        });
    }
    if let Some(bad) = y.iter().find(|&&v| v != 0.0 && v != 1.0) {
        return Err(LifeboatError::Validation(format!(
            "labels must be binary (0.0 or 1.0), got {}",
            bad
        )));
    }
    Ok(())
}
