//! Chart construction and reactive wiring for the experiment dashboard.
//!
//! This crate provides:
//! - `figure`: the declarative [`ChartSpec`] model (Plotly figure JSON)
//! - `theme`: dark/light colour tables and the positional series palette
//! - `builders`: the loss, accuracy and evaluation bar chart builders
//! - `selection`: [`SelectionState`] and the UI events that mutate it
//! - `binder`: [`ReactiveBinder`], which recomputes the charts an event affects

pub mod binder;
pub mod builders;
pub mod figure;
pub mod selection;
pub mod theme;

pub use binder::{build_chart, ChartError, ChartKind, ChartStatus, ChartUpdate, ReactiveBinder, Rendered};
pub use builders::{build_accuracy_chart, build_bar_chart, build_loss_chart};
pub use figure::{ChartSpec, Trace};
pub use selection::{SelectionEvent, SelectionField, SelectionState};
pub use theme::{palette_color, Theme, PALETTE};
