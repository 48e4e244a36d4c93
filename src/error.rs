//! Error types for the lifeboat pipeline

use thiserror::Error;

/// Result type alias for lifeboat operations
pub type Result<T> = std::result::Result<T, LifeboatError>;

/// Main error type for the lifeboat pipeline
#[derive(Error, Debug)]
pub enum LifeboatError {
    #[error("unknown {field} category: {value:?}")]
    UnknownCategory { field: &'static str, value: String },

    #[error("expected {expected} fields, found {found}")]
    MalformedRecord { expected: usize, found: usize },

    /// A record-level error located at a 1-based file line.
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: Box<LifeboatError>,
    },

    #[error("empty dataset: {0}")]
    EmptyDataset(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid shape: expected {expected}, got {actual}")]
    Shape { expected: String, actual: String },

    #[error("model not fitted")]
    ModelNotFitted,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LifeboatError {
    /// Wrap a record-level error with the 1-based line it was raised on.
    pub fn at_line(self, line: usize) -> Self {
        LifeboatError::Parse {
            line,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_display() {
        let err = LifeboatError::UnknownCategory {
            field: "age",
            value: "elder".to_string(),
        };
        assert_eq!(err.to_string(), "unknown age category: \"elder\"");
    }

    #[test]
    fn test_line_wrapping_display() {
        let err = LifeboatError::MalformedRecord {
            expected: 5,
            found: 3,
        }
        .at_line(7);
        assert_eq!(err.to_string(), "line 7: expected 5 fields, found 3");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LifeboatError = io_err.into();
        assert!(matches!(err, LifeboatError::Io(_)));
    }
}
