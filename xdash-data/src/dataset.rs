//! The in-memory experiment table.
//!
//! A [`Dataset`] is built once at startup from the experiment log CSV and is
//! never mutated afterwards. Chart builders receive it by reference; callers
//! that need to share it wrap it in an `Arc`.
//!
//! # CSV Format
//!
//! Header row required. Columns are matched by name, so order does not matter:
//!
//! ```text
//! Name Experiment,Epoch,Training Loss,Validation Loss,Validation Accuracy,Evaluation Accuracy,Evaluation Precision,Evaluation F1
//! Exp-A,1,0.9,1.0,0.55,0.80,0.78,0.79
//! Exp-A,2,0.5,0.7,0.68,,,
//! ```
//!
//! The three evaluation columns may be blank or absent; a missing value only
//! becomes an error when that metric is charted for the experiment.

use crate::error::{DatasetError, Result};
use crate::record::{ExperimentRecord, Metric};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<ExperimentRecord>,
    /// Distinct experiment names in order of first appearance.
    experiments: Vec<String>,
}

impl Dataset {
    /// Build a dataset from already-parsed rows.
    ///
    /// Fails if there are no rows or a row has a blank experiment name.
    pub fn from_records(records: Vec<ExperimentRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut experiments = Vec::new();
        for (idx, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(DatasetError::BlankName { row: idx + 1 });
            }
            if seen.insert(record.name.as_str()) {
                experiments.push(record.name.clone());
            }
        }

        Ok(Self {
            records,
            experiments,
        })
    }

    /// Load the experiment log from a CSV file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;
        log::info!(
            "loaded {} rows across {} experiments from {}",
            dataset.len(),
            dataset.experiments.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parse the experiment log from a CSV string (e.g. embedded with `include_str!`).
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in rdr.deserialize::<ExperimentRecord>() {
            records.push(result?);
        }
        log::debug!("parsed {} experiment rows", records.len());

        Self::from_records(records)
    }

    /// All rows in table order.
    pub fn records(&self) -> &[ExperimentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct experiment names, in order of first appearance.
    pub fn experiment_names(&self) -> &[String] {
        &self.experiments
    }

    /// Name of the first experiment in the table.
    pub fn first_experiment(&self) -> &str {
        self.experiments.first().map(String::as_str).unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.experiments.iter().any(|e| e == name)
    }

    /// Rows whose experiment name matches exactly, in table order.
    pub fn rows_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ExperimentRecord> + 'a {
        self.records.iter().filter(move |r| r.name == name)
    }

    pub fn first_row(&self, name: &str) -> Option<&ExperimentRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Evaluation score of an experiment, read from its first row.
    ///
    /// Returns `Ok(None)` when the experiment is not in the table and
    /// [`DatasetError::MissingMetric`] when its first row has no value for
    /// `metric`. Later rows are never consulted, even if they disagree.
    pub fn metric_value(&self, name: &str, metric: Metric) -> Result<Option<f64>> {
        match self.first_row(name) {
            None => Ok(None),
            Some(row) => match row.metric(metric) {
                Some(value) => Ok(Some(value)),
                None => Err(DatasetError::MissingMetric {
                    experiment: name.to_string(),
                    metric,
                }),
            },
        }
    }
}
