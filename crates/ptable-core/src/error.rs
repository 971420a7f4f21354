//! Load-time errors.
//!
//! Every [`DataError`] means the element dataset is unavailable: startup
//! cannot continue until the data source is fixed. Query-time problems are
//! never errors; they come back as [`QueryOutcome::Missing`](crate::QueryOutcome).

use std::path::PathBuf;
use thiserror::Error;

/// The dataset could not be read, parsed, or mapped onto the record schema.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset has an unexpected shape: {0}")]
    Shape(String),
    #[error("record {index} is malformed: {reason}")]
    Record { index: usize, reason: String },
}

impl DataError {
    pub(crate) fn record(index: usize, reason: impl Into<String>) -> Self {
        DataError::Record {
            index,
            reason: reason.into(),
        }
    }
}
