//! Reading passenger CSV files
//!
//! The file format is a header row followed by five-field data rows. The
//! header is dropped, every data line is parsed, and the first bad line
//! aborts the read with its 1-based line number attached.

use crate::dataset::record::PassengerRecord;
use crate::error::{LifeboatError, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a passenger CSV file into records, dropping the header line.
///
/// A file with no lines at all is an error; a header-only file yields an
/// empty record set.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Vec<PassengerRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    match lines.next() {
        Some(header) => {
            header?;
        }
        None => {
            return Err(LifeboatError::EmptyDataset(format!(
                "{} has no lines",
                path.display()
            )))
        }
    }

    let mut records = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line = line?;
        // header is line 1, so the first data line is line 2
        let record = PassengerRecord::parse(&line).map_err(|e| e.at_line(idx + 2))?;
        records.push(record);
    }

    Ok(records)
}

/// Per-category counts for a record set
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub n_records: usize,
    /// Records per ticket class, indexed by class code
    pub class_counts: [usize; 3],
    /// Records per age group: [child, adult]
    pub age_counts: [usize; 2],
    /// Records per gender: [man, woman]
    pub sex_counts: [usize; 2],
    pub survived: usize,
    pub perished: usize,
}

impl DatasetSummary {
    pub fn from_records(records: &[PassengerRecord]) -> Self {
        let mut summary = Self {
            n_records: records.len(),
            class_counts: [0; 3],
            age_counts: [0; 2],
            sex_counts: [0; 2],
            survived: 0,
            perished: 0,
        };

        for record in records {
            summary.class_counts[record.class.code()] += 1;
            summary.age_counts[record.age.code()] += 1;
            summary.sex_counts[record.sex.code()] += 1;
            if record.label() == 1.0 {
                summary.survived += 1;
            } else {
                summary.perished += 1;
            }
        }

        summary
    }

    /// Fraction of records that survived, 0.0 for an empty set
    pub fn survival_rate(&self) -> f64 {
        if self.n_records == 0 {
            0.0
        } else {
            self.survived as f64 / self.n_records as f64
        }
    }
}
