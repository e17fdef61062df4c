//! Ordered multi-selection of experiments, rendered as a checkbox list.
//!
//! Checking a box appends the experiment to the end of the list and
//! unchecking removes it, so series colours follow the order of selection.

use crate::state::AppState;
use dioxus::prelude::*;
use xdash_chart::selection::toggle_experiment;
use xdash_chart::{SelectionEvent, SelectionState};

/// Which selection list a checklist edits.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChecklistTarget {
    /// Accuracy comparison chart
    Comparison,
    /// Evaluation bar chart
    Evaluation,
}

impl ChecklistTarget {
    /// Selection field the list is stored under; also tags its checkboxes.
    pub fn list_name(&self) -> &'static str {
        match self {
            ChecklistTarget::Comparison => "comparison",
            ChecklistTarget::Evaluation => "evaluation",
        }
    }

    fn current(&self, selection: &SelectionState) -> Vec<String> {
        match self {
            ChecklistTarget::Comparison => selection.comparison.clone(),
            ChecklistTarget::Evaluation => selection.evaluation.clone(),
        }
    }

    fn event(&self, names: Vec<String>) -> SelectionEvent {
        match self {
            ChecklistTarget::Comparison => SelectionEvent::Comparison(names),
            ChecklistTarget::Evaluation => SelectionEvent::Evaluation(names),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ExperimentChecklistProps {
    pub target: ChecklistTarget,
    pub label: String,
}

#[component]
pub fn ExperimentChecklist(props: ExperimentChecklistProps) -> Element {
    let state = use_context::<AppState>();
    let experiments = state.experiments.read().clone();
    let chosen = state
        .selection
        .read()
        .as_ref()
        .map(|s| props.target.current(s))
        .unwrap_or_default();

    rsx! {
        div {
            style: "width: 50%; margin: auto; padding: 20px;",
            label {
                style: "font-weight: bold;",
                "{props.label}"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; margin: 10px 0;",
                for name in experiments.iter() {
                    ExperimentCheckbox {
                        key: "{name}",
                        name: name.clone(),
                        target: props.target,
                        checked: chosen.contains(name),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ExperimentCheckboxProps {
    name: String,
    target: ChecklistTarget,
    checked: bool,
}

#[component]
fn ExperimentCheckbox(props: ExperimentCheckboxProps) -> Element {
    let mut state = use_context::<AppState>();
    let name = props.name.clone();
    let target = props.target;
    let list = target.list_name();

    let on_toggle = move |_| {
        let current = state
            .selection
            .read()
            .as_ref()
            .map(|s| target.current(s))
            .unwrap_or_default();
        state.dispatch(target.event(toggle_experiment(&current, &name)));
    };

    rsx! {
        label {
            style: "display: inline-flex; align-items: center; gap: 4px; cursor: pointer;",
            input {
                r#type: "checkbox",
                "data-list": "{list}",
                value: "{props.name}",
                checked: props.checked,
                onclick: on_toggle,
            }
            "{props.name}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xdash_data::Dataset;

    #[test]
    fn list_names_match_selection_fields() {
        let dataset = Dataset::from_csv_str(
            "Name Experiment,Epoch,Training Loss,Validation Loss,Validation Accuracy\nExp-A,1,0.9,1.0,0.55\n",
        )
        .unwrap();
        let mut selection = SelectionState::initial(&dataset);
        selection.comparison = vec!["Exp-A".into(), "Exp-B".into()];
        let json = serde_json::to_value(&selection).unwrap();

        for target in [ChecklistTarget::Comparison, ChecklistTarget::Evaluation] {
            let field = &json[target.list_name()];
            assert_eq!(field, &serde_json::json!(target.current(&selection)));
        }
    }

    #[test]
    fn events_edit_their_own_list() {
        let names = vec!["Exp-A".to_string()];
        assert_eq!(
            ChecklistTarget::Comparison.event(names.clone()),
            SelectionEvent::Comparison(names.clone())
        );
        assert_eq!(
            ChecklistTarget::Evaluation.event(names.clone()),
            SelectionEvent::Evaluation(names)
        );
    }
}
