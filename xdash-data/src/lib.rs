//! Experiment log data for the training dashboard.
//!
//! This crate provides:
//! - `record`: one CSV row per experiment epoch, and the evaluation [`Metric`] enum
//! - `dataset`: the immutable [`Dataset`] table and its CSV loader
//! - `error`: [`DatasetError`], shared by the loader and the chart builders

pub mod dataset;
pub mod error;
pub mod record;

pub use dataset::Dataset;
pub use error::{DatasetError, Result};
pub use record::{ExperimentRecord, Metric, UnknownMetric};
