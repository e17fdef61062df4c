//! Chart container component.

use crate::components::ErrorDisplay;
use crate::state::AppState;
use dioxus::prelude::*;
use xdash_chart::ChartKind;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Which chart Plotly draws into this container
    pub chart: ChartKind,
    /// Optional minimum height in pixels
    #[props(default = 450)]
    pub min_height: u32,
}

/// A rounded, shadowed div that Plotly renders the chart into, preceded by
/// the chart's error when it cannot be drawn.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let state = use_context::<AppState>();
    let theme = state.theme();
    let id = props.chart.container_id();
    let error = state.chart_error(props.chart);
    let heading = format!("{} chart unavailable", props.chart.label());
    let style = format!(
        "min-height: {}px; width: 100%; margin: 12px 0; border-radius: 8px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); background: {};",
        props.min_height, theme.background
    );

    rsx! {
        if let Some(message) = error {
            ErrorDisplay { message, heading }
        }
        div {
            id: "{id}",
            class: "dash-graph",
            style: "{style}",
        }
    }
}
