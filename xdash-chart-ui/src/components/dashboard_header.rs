//! Page header with attribution lines and the theme switch.

use crate::components::ThemeSwitch;
use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    /// Italic lines on the left (project, author, ...)
    #[props(default = Vec::new())]
    pub lines: Vec<String>,
}

/// Header bar coloured from the current theme.
#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    let state = use_context::<AppState>();
    let theme = state.theme();

    rsx! {
        div {
            id: "header",
            style: "background-color: {theme.header}; color: {theme.text}; padding: 15px 20px; display: flex; justify-content: space-between; align-items: center; border-bottom: 2px solid #CCCCCC; line-height: 1.2;",
            div {
                for line in props.lines.iter() {
                    div {
                        style: "font-style: italic; font-size: 14px;",
                        "{line}"
                    }
                }
            }
            ThemeSwitch {}
        }
    }
}
