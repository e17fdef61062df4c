//! User-chosen filter values and the events that change them.

use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use xdash_data::{Dataset, Metric};

/// Everything the charts are computed from besides the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Experiment shown in the loss chart.
    pub experiment: String,
    /// Experiments compared in the accuracy chart, in selection order.
    pub comparison: Vec<String>,
    /// Experiments shown in the evaluation bar chart, in selection order.
    pub evaluation: Vec<String>,
    pub metric: Metric,
    pub dark_mode: bool,
}

impl SelectionState {
    /// Starting selection: the first experiment everywhere, evaluation
    /// accuracy, dark mode on.
    pub fn initial(dataset: &Dataset) -> Self {
        let first = dataset.first_experiment().to_string();
        Self {
            experiment: first.clone(),
            comparison: vec![first.clone()],
            evaluation: vec![first],
            metric: Metric::default(),
            dark_mode: true,
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    /// Apply an input event.
    ///
    /// Returns the field that changed, or `None` when the event carried the
    /// value the field already had.
    pub fn apply(&mut self, event: SelectionEvent) -> Option<SelectionField> {
        let field = event.field();
        let changed = match event {
            SelectionEvent::Experiment(name) => replace_if_changed(&mut self.experiment, name),
            SelectionEvent::Comparison(names) => replace_if_changed(&mut self.comparison, names),
            SelectionEvent::Evaluation(names) => replace_if_changed(&mut self.evaluation, names),
            SelectionEvent::Metric(metric) => replace_if_changed(&mut self.metric, metric),
            SelectionEvent::DarkMode(on) => replace_if_changed(&mut self.dark_mode, on),
        };
        changed.then_some(field)
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

/// A UI input: one control reporting its new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum SelectionEvent {
    /// Single-experiment dropdown.
    Experiment(String),
    /// Accuracy comparison multi-select.
    Comparison(Vec<String>),
    /// Evaluation bar chart multi-select.
    Evaluation(Vec<String>),
    /// Metric dropdown.
    Metric(Metric),
    /// Theme switch.
    DarkMode(bool),
}

impl SelectionEvent {
    pub fn field(&self) -> SelectionField {
        match self {
            SelectionEvent::Experiment(_) => SelectionField::Experiment,
            SelectionEvent::Comparison(_) => SelectionField::Comparison,
            SelectionEvent::Evaluation(_) => SelectionField::Evaluation,
            SelectionEvent::Metric(_) => SelectionField::Metric,
            SelectionEvent::DarkMode(_) => SelectionField::Theme,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionField {
    Experiment,
    Comparison,
    Evaluation,
    Metric,
    Theme,
}

/// Toggle `name` in an ordered selection list: remove every occurrence if
/// present, otherwise append it.
pub fn toggle_experiment(list: &[String], name: &str) -> Vec<String> {
    if list.iter().any(|e| e == name) {
        list.iter().filter(|e| *e != name).cloned().collect()
    } else {
        let mut next = list.to_vec();
        next.push(name.to_string());
        next
    }
}
