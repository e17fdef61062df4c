//! Dropdown selector for the loss chart's experiment.

use crate::state::AppState;
use dioxus::prelude::*;
use xdash_chart::SelectionEvent;

/// Single-experiment dropdown.
/// Lists every experiment in dataset order and dispatches the new choice.
#[component]
pub fn ExperimentSelector() -> Element {
    let mut state = use_context::<AppState>();
    let experiments = state.experiments.read().clone();
    let selected = state
        .selection
        .read()
        .as_ref()
        .map(|s| s.experiment.clone())
        .unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        state.dispatch(SelectionEvent::Experiment(evt.value()));
    };

    rsx! {
        div {
            style: "width: 50%; margin: auto; padding: 20px;",
            label {
                r#for: "experiment-selector-single",
                style: "font-weight: bold;",
                "Select Experiment for Training and Validation Loss:"
            }
            select {
                id: "experiment-selector-single",
                style: "width: 100%; margin: 10px 0;",
                onchange: on_change,
                for name in experiments.iter() {
                    option {
                        value: "{name}",
                        selected: *name == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
