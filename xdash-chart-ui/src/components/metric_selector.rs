//! Evaluation metric dropdown for the bar chart.

use crate::state::AppState;
use dioxus::prelude::*;
use xdash_chart::SelectionEvent;
use xdash_data::Metric;

#[component]
pub fn MetricSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = state
        .selection
        .read()
        .as_ref()
        .map(|s| s.metric)
        .unwrap_or_default();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Metric>() {
        Ok(metric) => state.dispatch(SelectionEvent::Metric(metric)),
        Err(e) => log::warn!("{}", e),
    };

    rsx! {
        div {
            style: "width: 50%; margin: auto; padding: 0 20px;",
            label {
                r#for: "metric-selector",
                style: "font-weight: bold;",
                "Select Metric for Bar Chart:"
            }
            select {
                id: "metric-selector",
                style: "width: 100%; margin: 10px 0;",
                onchange: on_change,
                for metric in Metric::ALL {
                    option {
                        value: "{metric}",
                        selected: metric == current,
                        "{metric}"
                    }
                }
            }
        }
    }
}
