//! Dataset error types.

use crate::record::Metric;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DatasetError>;

#[derive(Error, Debug)]
pub enum DatasetError {
    /// The CSV file could not be opened or read.
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Missing required column, non-numeric cell or broken CSV framing.
    #[error("malformed dataset: {0}")]
    Parse(#[from] csv::Error),

    #[error("dataset contains no experiment rows")]
    Empty,

    /// Data row (1-based, header excluded) whose experiment name is blank.
    #[error("row {row} has an empty experiment name")]
    BlankName { row: usize },

    /// The first row of an experiment has no value for the charted metric.
    #[error("`{metric}` has no value for experiment `{experiment}`")]
    MissingMetric { experiment: String, metric: Metric },
}
