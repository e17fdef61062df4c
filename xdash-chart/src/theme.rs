//! Dark and light colour tables.

use serde::Serialize;

/// Series colours, assigned by position and reused from the start once exhausted.
pub const PALETTE: [&str; 6] = [
    "#4C72B0", "#DD8452", "#55A868", "#C44E52", "#8172B2", "#DA8BC3",
];

/// Colour for the series at `index`; the seventh series reuses the first colour.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub background: &'static str,
    pub text: &'static str,
    pub header: &'static str,
}

impl Theme {
    pub const DARK: Theme = Theme {
        background: "#2F3136",
        text: "#FFFFFF",
        header: "#1E2124",
    };

    pub const LIGHT: Theme = Theme {
        background: "#FFFFFF",
        text: "#000000",
        header: "#E0E0E0",
    };

    pub fn from_dark_mode(dark_mode: bool) -> Theme {
        if dark_mode {
            Theme::DARK
        } else {
            Theme::LIGHT
        }
    }
}
