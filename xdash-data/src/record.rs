//! Per-epoch experiment rows and the evaluation metrics they carry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of the experiment log.
///
/// An experiment spans several rows, one per epoch. The evaluation scores are
/// final results for the whole experiment: they are either repeated on every
/// row or written once on the first row and left blank afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    #[serde(rename = "Name Experiment")]
    pub name: String,
    #[serde(rename = "Epoch")]
    pub epoch: u32,
    #[serde(rename = "Training Loss")]
    pub training_loss: f64,
    #[serde(rename = "Validation Loss")]
    pub validation_loss: f64,
    #[serde(rename = "Validation Accuracy")]
    pub validation_accuracy: f64,
    #[serde(rename = "Evaluation Accuracy", default)]
    pub evaluation_accuracy: Option<f64>,
    #[serde(rename = "Evaluation Precision", default)]
    pub evaluation_precision: Option<f64>,
    #[serde(rename = "Evaluation F1", default)]
    pub evaluation_f1: Option<f64>,
}

impl ExperimentRecord {
    /// Value of an evaluation metric on this row, if the cell was filled in.
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Accuracy => self.evaluation_accuracy,
            Metric::Precision => self.evaluation_precision,
            Metric::F1 => self.evaluation_f1,
        }
    }
}

/// Final evaluation metric selectable for the bar chart.
///
/// Serializes as the CSV column name, which is also the label shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Metric {
    #[default]
    #[serde(rename = "Evaluation Accuracy")]
    Accuracy,
    #[serde(rename = "Evaluation Precision")]
    Precision,
    #[serde(rename = "Evaluation F1")]
    F1,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Accuracy, Metric::Precision, Metric::F1];

    /// CSV column holding this metric.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Accuracy => "Evaluation Accuracy",
            Metric::Precision => "Evaluation Precision",
            Metric::F1 => "Evaluation F1",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Unrecognised metric name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetric(pub String);

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown evaluation metric `{}`", self.0)
    }
}

impl std::error::Error for UnknownMetric {}

impl FromStr for Metric {
    type Err = UnknownMetric;

    /// Accepts the column name or its short form (`accuracy`, `precision`, `f1`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let short = lowered.strip_prefix("evaluation ").unwrap_or(&lowered);
        match short {
            "accuracy" => Ok(Metric::Accuracy),
            "precision" => Ok(Metric::Precision),
            "f1" => Ok(Metric::F1),
            _ => Err(UnknownMetric(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ExperimentRecord {
        ExperimentRecord {
            name: "Exp-A".to_string(),
            epoch: 1,
            training_loss: 0.9,
            validation_loss: 1.0,
            validation_accuracy: 0.5,
            evaluation_accuracy: Some(0.8),
            evaluation_precision: Some(0.7),
            evaluation_f1: None,
        }
    }

    #[test]
    fn metric_reads_matching_column() {
        let r = record();
        assert_eq!(r.metric(Metric::Accuracy), Some(0.8));
        assert_eq!(r.metric(Metric::Precision), Some(0.7));
        assert_eq!(r.metric(Metric::F1), None);
    }

    #[test]
    fn metric_parses_column_and_short_names() {
        assert_eq!("Evaluation Accuracy".parse::<Metric>(), Ok(Metric::Accuracy));
        assert_eq!("evaluation precision".parse::<Metric>(), Ok(Metric::Precision));
        assert_eq!("F1".parse::<Metric>(), Ok(Metric::F1));
        assert!("Evaluation Recall".parse::<Metric>().is_err());
    }

    #[test]
    fn metric_display_is_column_name() {
        for metric in Metric::ALL {
            assert_eq!(metric.to_string(), metric.column());
            assert_eq!(metric.to_string().parse::<Metric>(), Ok(metric));
        }
    }

    #[test]
    fn default_metric_is_accuracy() {
        assert_eq!(Metric::default(), Metric::Accuracy);
    }
}
