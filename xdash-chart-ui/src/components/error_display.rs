//! Inline error notice.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// What failed, e.g. "Evaluation chart unavailable"
    #[props(default = "Data error".to_string())]
    pub heading: String,
}

/// Notice for a load failure, a rejected change or a chart that cannot be drawn.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "xdash-error",
            style: "padding: 10px 16px; margin: 8px auto; max-width: 900px; background: #FFEBEE; color: #C44E52; border-left: 4px solid #C44E52; border-radius: 4px; font-size: 14px;",
            strong { "{props.heading}: " }
            span { "{props.message}" }
        }
    }
}
