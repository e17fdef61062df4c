//! Placeholder shown while the experiment log is parsed.

use crate::state::AppState;
use dioxus::prelude::*;
use xdash_chart::PALETTE;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading experiments".to_string())]
    pub label: String,
}

/// Pulsing dot in the first series colour, on the current theme.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    let state = use_context::<AppState>();
    let theme = state.theme();
    let accent = PALETTE[0];

    rsx! {
        style { "@keyframes xdash-pulse {{ 0%, 100% {{ opacity: 0.3; }} 50% {{ opacity: 1; }} }}" }
        div {
            style: "display: flex; justify-content: center; align-items: center; gap: 10px; padding: 40px; color: {theme.text};",
            span {
                style: "width: 12px; height: 12px; border-radius: 50%; background: {accent}; animation: xdash-pulse 1s ease-in-out infinite;",
            }
            "{props.label}..."
        }
    }
}
