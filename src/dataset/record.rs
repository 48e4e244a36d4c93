//! Passenger records and the line parser
//!
//! One record per CSV data line. A line has the form
//! `"<id>","<class>","<age>","<sex>","<survived>"`: quotes are stripped,
//! the line is split on commas, and each categorical field is validated
//! against its vocabulary. Any unrecognized value or wrong field count is
//! an error; there is no partial parsing.

use crate::dataset::schema::{AgeGroup, Gender, Survival, TicketClass, N_FEATURES};
use crate::error::{LifeboatError, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Fields per data line: id, class, age, sex, survived
pub const FIELDS_PER_RECORD: usize = 5;

/// One parsed passenger: three categorical features plus the survival label.
/// Immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerRecord {
    pub class: TicketClass,
    pub age: AgeGroup,
    pub sex: Gender,
    pub survived: Survival,
}

impl PassengerRecord {
    /// Parse one raw data line. The leading id field is ignored.
    pub fn parse(line: &str) -> Result<Self> {
        let cleaned = line.replace('"', "");
        let fields: Vec<&str> = cleaned.split(',').collect();

        if fields.len() != FIELDS_PER_RECORD {
            return Err(LifeboatError::MalformedRecord {
                expected: FIELDS_PER_RECORD,
                found: fields.len(),
            });
        }

        Ok(Self {
            class: TicketClass::parse(fields[1])?,
            age: AgeGroup::parse(fields[2])?,
            sex: Gender::parse(fields[3])?,
            survived: Survival::parse(fields[4])?,
        })
    }

    /// Feature vector as integer codes, in `FEATURE_NAMES` order
    pub fn feature_codes(&self) -> [usize; N_FEATURES] {
        [self.class.code(), self.age.code(), self.sex.code()]
    }

    /// Feature vector as model input
    pub fn features(&self) -> [f64; N_FEATURES] {
        [
            self.class.code() as f64,
            self.age.code() as f64,
            self.sex.code() as f64,
        ]
    }

    /// Binary label: 1.0 = survived
    pub fn label(&self) -> f64 {
        self.survived.label() as f64
    }

    /// Canonical tokens for class, age, sex, and survived. Parsing a line
    /// and reading these back recovers the original categorical strings.
    pub fn tokens(&self) -> [&'static str; 4] {
        [
            self.class.as_str(),
            self.age.as_str(),
            self.sex.as_str(),
            self.survived.as_str(),
        ]
    }
}

/// Build the feature matrix and label vector for a record set.
pub fn to_matrices(records: &[PassengerRecord]) -> Result<(Array2<f64>, Array1<f64>)> {
    if records.is_empty() {
        return Err(LifeboatError::EmptyDataset(
            "no records to build matrices from".to_string(),
        ));
    }

    let mut data = Vec::with_capacity(records.len() * N_FEATURES);
    for record in records {
        data.extend_from_slice(&record.features());
    }

    let x = Array2::from_shape_vec((records.len(), N_FEATURES), data).map_err(|e| {
        LifeboatError::Shape {
            expected: format!("{}x{}", records.len(), N_FEATURES),
            actual: e.to_string(),
        }
    })?;
    let y = Array1::from_iter(records.iter().map(|r| r.label()));

    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_line() {
        let record = PassengerRecord::parse("\"1\",\"1st class\",\"adults\",\"man\",\"yes\"")
            .unwrap();
        assert_eq!(record.label(), 1.0);
        assert_eq!(record.features(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_parse_unquoted_line() {
        let record = PassengerRecord::parse("842,3rd class,child,women,no").unwrap();
        assert_eq!(record.label(), 0.0);
        assert_eq!(record.features(), [2.0, 0.0, 1.0]);
    }

    #[test]
    fn test_round_trip_tokens() {
        let record = PassengerRecord::parse("\"7\",\"2nd class\",\"adults\",\"women\",\"yes\"")
            .unwrap();
        assert_eq!(record.tokens(), ["2nd class", "adults", "women", "yes"]);
    }

    #[test]
    fn test_wrong_field_count_fails() {
        let err = PassengerRecord::parse("\"1\",\"1st class\",\"adults\"").unwrap_err();
        assert!(matches!(
            err,
            LifeboatError::MalformedRecord {
                expected: 5,
                found: 3
            }
        ));
    }

    #[test]
    fn test_blank_line_fails() {
        let err = PassengerRecord::parse("").unwrap_err();
        assert!(matches!(
            err,
            LifeboatError::MalformedRecord { expected: 5, .. }
        ));
    }

    #[test]
    fn test_unknown_category_fails() {
        let err = PassengerRecord::parse("\"1\",\"1st class\",\"elder\",\"man\",\"yes\"")
            .unwrap_err();
        assert!(matches!(
            err,
            LifeboatError::UnknownCategory { field: "age", .. }
        ));
    }

    #[test]
    fn test_to_matrices() {
        let records = vec![
            PassengerRecord::parse("\"1\",\"1st class\",\"adults\",\"man\",\"yes\"").unwrap(),
            PassengerRecord::parse("\"2\",\"3rd class\",\"child\",\"women\",\"no\"").unwrap(),
        ];
        let (x, y) = to_matrices(&records).unwrap();
        assert_eq!(x.shape(), &[2, 3]);
        assert_eq!(x.row(0).to_vec(), vec![0.0, 1.0, 0.0]);
        assert_eq!(x.row(1).to_vec(), vec![2.0, 0.0, 1.0]);
        assert_eq!(y.to_vec(), vec![1.0, 0.0]);
    }

    #[test]
    fn test_to_matrices_empty_fails() {
        assert!(matches!(
            to_matrices(&[]).unwrap_err(),
            LifeboatError::EmptyDataset(_)
        ));
    }
}
