//! Dark/light mode toggle.

use crate::state::AppState;
use dioxus::prelude::*;
use xdash_chart::{SelectionEvent, PALETTE};

#[component]
pub fn ThemeSwitch() -> Element {
    let mut state = use_context::<AppState>();
    let dark_mode = state
        .selection
        .read()
        .as_ref()
        .map(|s| s.dark_mode)
        .unwrap_or(true);
    let label = if dark_mode { "On" } else { "Off" };
    let accent = PALETTE[0];

    let on_click = move |_| {
        state.dispatch(SelectionEvent::DarkMode(!dark_mode));
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: flex-end;",
            span {
                style: "margin-right: 10px; font-size: 14px;",
                "Dark Mode"
            }
            button {
                id: "dark-mode-switch",
                style: "background-color: {accent}; color: white; border: none; padding: 6px 16px; border-radius: 12px; cursor: pointer;",
                onclick: on_click,
                "{label}"
            }
        }
    }
}
