//! Reusable Dioxus RSX components for the experiment dashboard.

mod chart_container;
mod dashboard_header;
mod error_display;
mod experiment_checklist;
mod experiment_selector;
mod loading_spinner;
mod metric_selector;
mod theme_switch;

pub use chart_container::ChartContainer;
pub use dashboard_header::DashboardHeader;
pub use error_display::ErrorDisplay;
pub use experiment_checklist::{ChecklistTarget, ExperimentChecklist};
pub use experiment_selector::ExperimentSelector;
pub use loading_spinner::LoadingSpinner;
pub use metric_selector::MetricSelector;
pub use theme_switch::ThemeSwitch;
