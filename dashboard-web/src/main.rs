//! MViT Master Model Experiments
//!
//! Single-page dashboard over the experiment log: training/validation loss
//! for one experiment, validation accuracy across several, and a bar chart of
//! a chosen final evaluation metric, with a dark/light switch.
//!
//! Data flow:
//! 1. `build.rs` checks the header of `fixtures/experiments.csv` and copies it
//!    into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount: parse it into a `Dataset`, hand it to the binder in
//!    `AppState`, and draw all three charts.
//! 4. Every control change goes through `AppState::dispatch`, which redraws
//!    only the charts that read the changed value.

use dioxus::prelude::*;
use xdash_chart::ChartKind;
use xdash_chart_ui::components::{
    ChartContainer, ChecklistTarget, DashboardHeader, ErrorDisplay, ExperimentChecklist,
    ExperimentSelector, LoadingSpinner, MetricSelector,
};
use xdash_chart_ui::js_bridge;
use xdash_chart_ui::state::AppState;
use xdash_data::Dataset;

const EXPERIMENTS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/experiments.csv"));

const PAGE_TITLE: &str = "Dan Santivañez Master Model Experiments";
const MAIN_TITLE: &str = "Multiescale Vision Transformer (MViT) Master Model Experiments";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Parse CSV once on mount ───
    use_effect(move || {
        js_bridge::set_document_title(PAGE_TITLE);
        js_bridge::init_charts();

        match Dataset::from_csv_str(EXPERIMENTS_CSV) {
            Ok(dataset) => {
                log::info!(
                    "loaded {} rows across {} experiments",
                    dataset.len(),
                    dataset.experiment_names().len()
                );
                state.install(dataset);
            }
            Err(e) => {
                log::error!("Failed to load experiments: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load experiment data: {}", e)));
                state.loading.set(false);
            }
        }
    });

    let theme = state.theme();

    rsx! {
        div {
            id: "page-content",
            style: "background-color: {theme.background}; color: {theme.text}; min-height: 100vh; font-family: 'Poppins', system-ui, -apple-system, sans-serif;",

            DashboardHeader {
                lines: vec![
                    "Thesis: Distillation of Violence Detection in Surveillance Videos Based on MViT Model".to_string(),
                    "Author: Dan Santivañez Gutarra".to_string(),
                ],
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if state.binder.read().is_some() {
                div {
                    id: "main-content",
                    style: "padding: 20px;",
                    h1 {
                        id: "main-title",
                        style: "text-align: center; margin-bottom: 20px; font-size: 24px; font-weight: bold;",
                        "{MAIN_TITLE}"
                    }

                    ExperimentSelector {}
                    ChartContainer { chart: ChartKind::Loss }

                    ExperimentChecklist {
                        target: ChecklistTarget::Comparison,
                        label: "Select Experiments for Validation Accuracy Comparison:".to_string(),
                    }
                    ChartContainer { chart: ChartKind::Accuracy }

                    ExperimentChecklist {
                        target: ChecklistTarget::Evaluation,
                        label: "Select Experiments for Evaluation Metrics:".to_string(),
                    }
                    MetricSelector {}
                    ChartContainer { chart: ChartKind::Evaluation }
                }
            }
        }
    }
}
