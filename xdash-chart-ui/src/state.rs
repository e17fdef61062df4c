//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()` and route every input through
//! [`AppState::dispatch`], which hands the event to the [`ReactiveBinder`] and
//! draws whichever charts it recomputed.

use crate::js_bridge;
use dioxus::prelude::*;
use std::sync::Arc;
use xdash_chart::{ChartError, ChartKind, ReactiveBinder, Rendered, SelectionEvent, SelectionState, Theme};
use xdash_data::Dataset;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Binder owning the dataset, selection and published charts (None until loaded)
    pub binder: Signal<Option<ReactiveBinder>>,
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Load failure or the reason the last control change was rejected
    pub error_msg: Signal<Option<String>>,
    /// Charts that could not be drawn for the current selection
    pub chart_errors: Signal<Vec<ChartError>>,
    /// Experiment names offered by every selector
    pub experiments: Signal<Vec<String>>,
    /// Copy of the binder's selection for rendering the controls
    pub selection: Signal<Option<SelectionState>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            binder: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            chart_errors: Signal::new(Vec::new()),
            experiments: Signal::new(Vec::new()),
            selection: Signal::new(None),
        }
    }

    /// Theme of the current selection; dark until a dataset is installed.
    pub fn theme(&self) -> Theme {
        self.selection
            .read()
            .as_ref()
            .map(SelectionState::theme)
            .unwrap_or(Theme::DARK)
    }

    /// Error for `chart`, if it could not be drawn.
    pub fn chart_error(&self, chart: ChartKind) -> Option<String> {
        self.chart_errors
            .read()
            .iter()
            .find(|e| e.chart == chart)
            .map(|e| e.message.clone())
    }

    /// Take ownership of a loaded dataset and draw the initial charts.
    pub fn install(&mut self, dataset: Dataset) {
        let experiments = dataset.experiment_names().to_vec();
        let mut binder = ReactiveBinder::new(Arc::new(dataset));

        let rendered = binder.render_all();
        for error in &rendered.errors {
            log::warn!("{} chart unavailable: {}", error.chart.label(), error.message);
        }
        js_bridge::publish(&rendered.updates);
        self.chart_errors.set(rendered.errors);

        let selection = binder.selection().clone();
        js_bridge::apply_page_theme(&selection.theme(), selection.dark_mode);

        self.experiments.set(experiments);
        self.selection.set(Some(selection));
        self.binder.set(Some(binder));
        self.loading.set(false);
    }

    /// Route one control change through the binder and redraw what it recomputed.
    pub fn dispatch(&mut self, event: SelectionEvent) {
        log::debug!("dispatch {:?}", event);
        let (outcome, selection) = {
            let mut guard = self.binder.write();
            let Some(binder) = guard.as_mut() else {
                return;
            };
            let outcome = binder.dispatch(event);
            (outcome, binder.selection().clone())
        };

        match outcome {
            Ok(rendered) if !rendered.is_empty() => {
                self.error_msg.set(None);
                js_bridge::apply_page_theme(&selection.theme(), selection.dark_mode);
                js_bridge::publish(&rendered.updates);
                self.record_chart_errors(&rendered);
            }
            Ok(_) => {}
            Err(e) => {
                log::error!("selection change rejected: {}", e);
                self.error_msg.set(Some(e.to_string()));
            }
        }
        js_bridge::sync_controls(&selection);
        self.selection.set(Some(selection));
    }

    /// Replace the errors of every recomputed chart with this pass's failures.
    fn record_chart_errors(&mut self, rendered: &Rendered) {
        for error in &rendered.errors {
            js_bridge::purge_chart(error.chart.container_id());
        }
        let recomputed: Vec<ChartKind> = rendered.charts().into_iter().chain(rendered.failed()).collect();
        let mut errors: Vec<ChartError> = self
            .chart_errors
            .read()
            .iter()
            .filter(|e| !recomputed.contains(&e.chart))
            .cloned()
            .collect();
        errors.extend(rendered.errors.iter().cloned());
        self.chart_errors.set(errors);
    }
}
