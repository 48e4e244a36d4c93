//! End-to-end pipeline
//!
//! Composes the stages in order: read the CSV, split into train/test,
//! fit the decision tree and the logistic regression on the training
//! subset, evaluate both on the test subset. Produces a serializable
//! report with counts, per-model scores, and fit times.

use crate::dataset::record::to_matrices;
use crate::dataset::reader::read_csv;
use crate::dataset::split::{train_test_split, SplitConfig};
use crate::error::{LifeboatError, Result};
use crate::evaluate::{evaluate, Evaluation};
use crate::training::{Classifier, DecisionTree, LogisticRegression};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Configuration for one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub split: SplitConfig,
    /// Maximum decision tree depth, unlimited when `None`
    pub max_depth: Option<usize>,
    /// Maximum gradient descent iterations for the logistic regression
    pub max_iter: usize,
    /// Gradient descent learning rate
    pub learning_rate: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            split: SplitConfig::default(),
            max_depth: None,
            max_iter: 1000,
            learning_rate: 0.1,
        }
    }
}

/// Scores and fit time of one trained model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelReport {
    pub evaluation: Evaluation,
    pub fit_time_secs: f64,
}

/// Result of one full pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub config: PipelineConfig,
    pub n_records: usize,
    pub n_train: usize,
    pub n_test: usize,
    pub models: Vec<ModelReport>,
    pub generated_at: DateTime<Utc>,
}

impl PipelineReport {
    /// Model with the highest test accuracy
    pub fn best_model(&self) -> Option<&ModelReport> {
        self.models.iter().max_by(|a, b| {
            a.evaluation
                .accuracy
                .partial_cmp(&b.evaluation.accuracy)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run the full pipeline against a passenger CSV file.
pub fn run<P: AsRef<Path>>(path: P, config: &PipelineConfig) -> Result<PipelineReport> {
    let path = path.as_ref();

    let records = read_csv(path)?;
    if records.is_empty() {
        return Err(LifeboatError::EmptyDataset(format!(
            "{} contains a header but no records",
            path.display()
        )));
    }
    info!(records = records.len(), path = %path.display(), "parsed dataset");

    let split = train_test_split(&records, &config.split)?;
    info!(
        train = split.n_train(),
        test = split.n_test(),
        seed = config.split.seed,
        "split dataset"
    );
    if split.train.is_empty() || split.test.is_empty() {
        return Err(LifeboatError::EmptyDataset(format!(
            "split produced {} train / {} test records",
            split.n_train(),
            split.n_test()
        )));
    }

    let (x_train, y_train) = to_matrices(&split.train)?;

    let mut tree = DecisionTree::new();
    if let Some(depth) = config.max_depth {
        tree = tree.with_max_depth(depth);
    }
    let logistic = LogisticRegression::new()
        .with_max_iter(config.max_iter)
        .with_learning_rate(config.learning_rate);

    let mut models: Vec<Box<dyn Classifier>> = vec![Box::new(tree), Box::new(logistic)];
    let mut reports = Vec::with_capacity(models.len());

    for model in &mut models {
        let start = Instant::now();
        model.fit(&x_train, &y_train)?;
        let fit_time_secs = start.elapsed().as_secs_f64();

        let evaluation = evaluate(model.as_ref(), &split.test)?;
        info!(
            model = %evaluation.model,
            accuracy = evaluation.accuracy,
            "evaluated model"
        );

        reports.push(ModelReport {
            evaluation,
            fit_time_secs,
        });
    }

    Ok(PipelineReport {
        config: config.clone(),
        n_records: records.len(),
        n_train: split.n_train(),
        n_test: split.n_test(),
        models: reports,
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Fixture where women and children survive, men do not
    fn write_fixture(n_rows: usize) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "\"\",\"class\",\"age\",\"sex\",\"survived\"").unwrap();
        for i in 0..n_rows {
            let class = ["1st class", "2nd class", "3rd class"][i % 3];
            let age = ["adults", "child"][i % 2];
            let sex = ["man", "women"][(i / 2) % 2];
            let survived = if sex == "women" || age == "child" {
                "yes"
            } else {
                "no"
            };
            writeln!(
                file,
                "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"",
                i + 1,
                class,
                age,
                sex,
                survived
            )
            .unwrap();
        }
        file
    }

    #[test]
    fn test_run_produces_report() {
        let file = write_fixture(60);
        let report = run(file.path(), &PipelineConfig::default()).unwrap();

        assert_eq!(report.n_records, 60);
        assert_eq!(report.n_train + report.n_test, 60);
        assert_eq!(report.models.len(), 2);
        for model in &report.models {
            assert!((0.0..=1.0).contains(&model.evaluation.accuracy));
        }
    }

    #[test]
    fn test_models_learn_the_rule() {
        let file = write_fixture(120);
        let report = run(file.path(), &PipelineConfig::default()).unwrap();

        // the rule is a function of the features, so both models should
        // score well above chance
        let best = report.best_model().unwrap();
        assert!(
            best.evaluation.accuracy > 0.8,
            "best accuracy {}",
            best.evaluation.accuracy
        );
    }

    #[test]
    fn test_run_is_deterministic_apart_from_timing() {
        let file = write_fixture(60);
        let config = PipelineConfig::default();

        let first = run(file.path(), &config).unwrap();
        let second = run(file.path(), &config).unwrap();

        assert_eq!(first.n_train, second.n_train);
        assert_eq!(first.n_test, second.n_test);
        for (a, b) in first.models.iter().zip(second.models.iter()) {
            assert_eq!(a.evaluation.accuracy, b.evaluation.accuracy);
        }
    }

    #[test]
    fn test_header_only_file_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "\"\",\"class\",\"age\",\"sex\",\"survived\"").unwrap();

        let err = run(file.path(), &PipelineConfig::default()).unwrap_err();
        assert!(matches!(err, LifeboatError::EmptyDataset(_)));
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let file = write_fixture(40);
        let report = run(file.path(), &PipelineConfig::default()).unwrap();

        let json = report.to_json().unwrap();
        let parsed: PipelineReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.n_records, report.n_records);
        assert_eq!(parsed.models.len(), report.models.len());
        assert_eq!(
            parsed.models[0].evaluation.accuracy,
            report.models[0].evaluation.accuracy
        );
    }
}
