//! Reactive wiring from selection changes to chart recomputation.
//!
//! Each chart declares the selection fields it reads ([`ChartKind::inputs`]).
//! [`ReactiveBinder::dispatch`] applies one input event, recomputes exactly
//! the charts that read the changed field, and only then publishes them.
//! Charts are built independently: a chart that cannot be drawn is reported
//! on its own and never keeps the others from being published. Only a chart
//! that is currently drawn can reject an event, in which case nothing changes.

use crate::builders::{build_accuracy_chart, build_bar_chart, build_loss_chart};
use crate::figure::ChartSpec;
use crate::selection::{SelectionEvent, SelectionField, SelectionState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use xdash_data::{Dataset, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Loss,
    Accuracy,
    Evaluation,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Loss, ChartKind::Accuracy, ChartKind::Evaluation];

    /// Selection fields this chart is computed from.
    pub fn inputs(&self) -> &'static [SelectionField] {
        match self {
            ChartKind::Loss => &[SelectionField::Experiment, SelectionField::Theme],
            ChartKind::Accuracy => &[SelectionField::Comparison, SelectionField::Theme],
            ChartKind::Evaluation => &[
                SelectionField::Evaluation,
                SelectionField::Metric,
                SelectionField::Theme,
            ],
        }
    }

    pub fn depends_on(&self, field: SelectionField) -> bool {
        self.inputs().contains(&field)
    }

    /// Short name shown next to a chart's error.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Loss => "Loss",
            ChartKind::Accuracy => "Accuracy",
            ChartKind::Evaluation => "Evaluation",
        }
    }

    /// DOM id of the element the chart is drawn into.
    pub fn container_id(&self) -> &'static str {
        match self {
            ChartKind::Loss => "loss-graph",
            ChartKind::Accuracy => "accuracy-graph",
            ChartKind::Evaluation => "evaluation-bar-chart",
        }
    }
}

/// Build one chart from the current selection.
pub fn build_chart(kind: ChartKind, dataset: &Dataset, selection: &SelectionState) -> Result<ChartSpec> {
    let theme = selection.theme();
    match kind {
        ChartKind::Loss => Ok(build_loss_chart(dataset, &selection.experiment, &theme)),
        ChartKind::Accuracy => Ok(build_accuracy_chart(dataset, selection.comparison.as_slice(), &theme)),
        ChartKind::Evaluation => build_bar_chart(dataset, selection.evaluation.as_slice(), selection.metric, &theme),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStatus {
    /// Not computed for the current selection, or its last build failed.
    Stale,
    Current,
}

/// A freshly recomputed chart, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartUpdate {
    pub chart: ChartKind,
    pub figure: ChartSpec,
}

/// A chart that could not be built for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartError {
    pub chart: ChartKind,
    pub message: String,
}

/// Outcome of one render pass: the charts to draw and the ones that failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rendered {
    pub updates: Vec<ChartUpdate>,
    pub errors: Vec<ChartError>,
}

impl Rendered {
    /// Nothing was recomputed.
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty() && self.errors.is_empty()
    }

    pub fn charts(&self) -> Vec<ChartKind> {
        self.updates.iter().map(|u| u.chart).collect()
    }

    pub fn failed(&self) -> Vec<ChartKind> {
        self.errors.iter().map(|e| e.chart).collect()
    }
}

/// Owns the selection and the last published chart of each kind.
#[derive(Debug, Clone)]
pub struct ReactiveBinder {
    dataset: Arc<Dataset>,
    selection: SelectionState,
    charts: BTreeMap<ChartKind, ChartSpec>,
}

impl ReactiveBinder {
    /// Binder with the initial selection for `dataset`. All charts start stale.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let selection = SelectionState::initial(&dataset);
        Self::with_selection(dataset, selection)
    }

    pub fn with_selection(dataset: Arc<Dataset>, selection: SelectionState) -> Self {
        Self {
            dataset,
            selection,
            charts: BTreeMap::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn chart(&self, kind: ChartKind) -> Option<&ChartSpec> {
        self.charts.get(&kind)
    }

    pub fn status(&self, kind: ChartKind) -> ChartStatus {
        if self.charts.contains_key(&kind) {
            ChartStatus::Current
        } else {
            ChartStatus::Stale
        }
    }

    /// Recompute every chart for the current selection (initial paint).
    ///
    /// Charts are independent: one that fails is reported in
    /// [`Rendered::errors`] and left stale while the others are published.
    pub fn render_all(&mut self) -> Rendered {
        let mut rendered = Rendered::default();
        for kind in ChartKind::ALL {
            match build_chart(kind, &self.dataset, &self.selection) {
                Ok(figure) => {
                    self.charts.insert(kind, figure.clone());
                    rendered.updates.push(ChartUpdate { chart: kind, figure });
                }
                Err(e) => {
                    log::warn!("{} chart unavailable: {}", kind.container_id(), e);
                    self.charts.remove(&kind);
                    rendered.errors.push(ChartError {
                        chart: kind,
                        message: e.to_string(),
                    });
                }
            }
        }
        rendered
    }

    /// Apply one input event and return the charts it recomputed.
    ///
    /// An event that does not change the selection returns nothing. If a
    /// chart that is currently drawn cannot be rebuilt, the event is rejected
    /// and neither the selection nor any chart changes. A chart that was
    /// already stale cannot veto the event; its failure is reported and the
    /// other charts are published.
    pub fn dispatch(&mut self, event: SelectionEvent) -> Result<Rendered> {
        let mut next = self.selection.clone();
        let Some(field) = next.apply(event) else {
            log::debug!("selection unchanged, nothing to recompute");
            return Ok(Rendered::default());
        };

        let affected: Vec<ChartKind> = ChartKind::ALL
            .into_iter()
            .filter(|kind| kind.depends_on(field))
            .collect();
        log::debug!("{:?} changed, recomputing {:?}", field, affected);

        let mut rendered = Rendered::default();
        for kind in affected {
            match build_chart(kind, &self.dataset, &next) {
                Ok(figure) => rendered.updates.push(ChartUpdate { chart: kind, figure }),
                Err(e) if self.status(kind) == ChartStatus::Current => {
                    log::warn!("rejected selection change: {} chart failed: {}", kind.container_id(), e);
                    return Err(e);
                }
                Err(e) => {
                    log::warn!("{} chart still unavailable: {}", kind.container_id(), e);
                    rendered.errors.push(ChartError {
                        chart: kind,
                        message: e.to_string(),
                    });
                }
            }
        }

        self.selection = next;
        for update in &rendered.updates {
            self.charts.insert(update.chart, update.figure.clone());
        }
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use xdash_data::{DatasetError, Metric};

    const SAMPLE_CSV: &str = "\
Name Experiment,Epoch,Training Loss,Validation Loss,Validation Accuracy,Evaluation Accuracy,Evaluation Precision,Evaluation F1
Exp-A,1,0.9,1.0,0.55,0.80,0.78,0.79
Exp-A,2,0.5,0.7,0.68,0.80,0.78,0.79
Exp-B,1,0.8,0.9,0.60,0.83,0.81,
Exp-B,2,0.4,0.6,0.71,0.83,0.81,
";

    const TRAINING_ONLY_CSV: &str = "\
Name Experiment,Epoch,Training Loss,Validation Loss,Validation Accuracy
Exp-A,1,0.9,1.0,0.55
Exp-A,2,0.5,0.7,0.68
Exp-B,1,0.8,0.9,0.60
";

    fn binder_for(csv: &str) -> ReactiveBinder {
        let dataset = Arc::new(Dataset::from_csv_str(csv).unwrap());
        ReactiveBinder::new(dataset)
    }

    fn sample_binder() -> ReactiveBinder {
        binder_for(SAMPLE_CSV)
    }

    #[test]
    fn charts_start_stale_until_rendered() {
        let mut binder = sample_binder();
        for kind in ChartKind::ALL {
            assert_eq!(binder.status(kind), ChartStatus::Stale);
        }
        let rendered = binder.render_all();
        assert_eq!(rendered.charts(), ChartKind::ALL.to_vec());
        assert!(rendered.errors.is_empty());
        for kind in ChartKind::ALL {
            assert_eq!(binder.status(kind), ChartStatus::Current);
        }
    }

    #[test]
    fn experiment_change_recomputes_loss_only() {
        let mut binder = sample_binder();
        binder.render_all();
        let rendered = binder
            .dispatch(SelectionEvent::Experiment("Exp-B".to_string()))
            .unwrap();
        assert_eq!(rendered.charts(), vec![ChartKind::Loss]);

        let loss = binder.chart(ChartKind::Loss).unwrap();
        assert_eq!(loss.traces()[0].as_line().unwrap().y, vec![0.8, 0.4]);
    }

    #[test]
    fn metric_change_recomputes_evaluation_only() {
        let mut binder = sample_binder();
        binder.render_all();
        let rendered = binder.dispatch(SelectionEvent::Metric(Metric::Precision)).unwrap();
        assert_eq!(rendered.charts(), vec![ChartKind::Evaluation]);
        assert_eq!(binder.selection().metric, Metric::Precision);
    }

    #[test]
    fn comparison_change_recomputes_accuracy_only() {
        let mut binder = sample_binder();
        let rendered = binder
            .dispatch(SelectionEvent::Comparison(vec!["Exp-A".into(), "Exp-B".into()]))
            .unwrap();
        assert_eq!(rendered.charts(), vec![ChartKind::Accuracy]);
        assert_eq!(rendered.updates[0].figure.traces().len(), 2);
        assert_eq!(binder.status(ChartKind::Loss), ChartStatus::Stale);
    }

    #[test]
    fn theme_change_recomputes_every_chart() {
        let mut binder = sample_binder();
        binder.render_all();
        let rendered = binder.dispatch(SelectionEvent::DarkMode(false)).unwrap();
        assert_eq!(rendered.charts(), ChartKind::ALL.to_vec());
        for update in &rendered.updates {
            assert_eq!(update.figure.layout.plot_bgcolor, Theme::LIGHT.background);
        }
    }

    #[test]
    fn unchanged_value_recomputes_nothing() {
        let mut binder = sample_binder();
        binder.render_all();
        let rendered = binder
            .dispatch(SelectionEvent::Experiment("Exp-A".to_string()))
            .unwrap();
        assert!(rendered.is_empty());
    }

    #[test]
    fn failed_recomputation_leaves_state_untouched() {
        let mut binder = sample_binder();
        binder.render_all();
        binder
            .dispatch(SelectionEvent::Evaluation(vec!["Exp-A".into(), "Exp-B".into()]))
            .unwrap();
        let before_selection = binder.selection().clone();
        let before_chart = binder.chart(ChartKind::Evaluation).cloned();

        // Exp-B has no F1 score.
        let err = binder.dispatch(SelectionEvent::Metric(Metric::F1)).unwrap_err();
        assert!(matches!(err, DatasetError::MissingMetric { .. }));
        assert_eq!(binder.selection(), &before_selection);
        assert_eq!(binder.chart(ChartKind::Evaluation).cloned(), before_chart);
    }

    #[test]
    fn initial_paint_draws_charts_independently() {
        let mut binder = binder_for(TRAINING_ONLY_CSV);
        let rendered = binder.render_all();

        assert_eq!(rendered.charts(), vec![ChartKind::Loss, ChartKind::Accuracy]);
        assert_eq!(rendered.failed(), vec![ChartKind::Evaluation]);
        assert!(rendered.errors[0].message.contains("Exp-A"));
        assert_eq!(binder.status(ChartKind::Loss), ChartStatus::Current);
        assert_eq!(binder.status(ChartKind::Accuracy), ChartStatus::Current);
        assert_eq!(binder.status(ChartKind::Evaluation), ChartStatus::Stale);
    }

    #[test]
    fn stale_chart_does_not_block_theme_change() {
        let mut binder = binder_for(TRAINING_ONLY_CSV);
        binder.render_all();

        let rendered = binder.dispatch(SelectionEvent::DarkMode(false)).unwrap();
        assert!(!binder.selection().dark_mode);
        assert_eq!(rendered.charts(), vec![ChartKind::Loss, ChartKind::Accuracy]);
        assert_eq!(rendered.failed(), vec![ChartKind::Evaluation]);
        for kind in [ChartKind::Loss, ChartKind::Accuracy] {
            assert_eq!(binder.chart(kind).unwrap().layout.plot_bgcolor, Theme::LIGHT.background);
        }
        assert_eq!(binder.status(ChartKind::Evaluation), ChartStatus::Stale);
    }

    #[test]
    fn stale_chart_recovers_once_its_inputs_build() {
        let dataset = Arc::new(Dataset::from_csv_str(SAMPLE_CSV).unwrap());
        let mut selection = SelectionState::initial(&dataset);
        selection.evaluation = vec!["Exp-B".into()];
        selection.metric = Metric::F1;
        let mut binder = ReactiveBinder::with_selection(dataset, selection);
        let rendered = binder.render_all();
        assert_eq!(rendered.failed(), vec![ChartKind::Evaluation]);

        // Swapping to an experiment that has an F1 score draws the chart again.
        let rendered = binder
            .dispatch(SelectionEvent::Evaluation(vec!["Exp-A".into()]))
            .unwrap();
        assert_eq!(rendered.charts(), vec![ChartKind::Evaluation]);
        assert!(rendered.errors.is_empty());
        assert_eq!(binder.status(ChartKind::Evaluation), ChartStatus::Current);
    }

    #[test]
    fn published_charts_match_direct_builds() {
        let mut binder = sample_binder();
        binder
            .dispatch(SelectionEvent::Evaluation(vec!["Exp-B".into(), "Exp-A".into()]))
            .unwrap();
        binder.render_all();
        for kind in ChartKind::ALL {
            let direct = build_chart(kind, binder.dataset(), binder.selection()).unwrap();
            assert_eq!(binder.chart(kind), Some(&direct));
        }
    }

    #[test]
    fn dependency_table() {
        assert!(ChartKind::Loss.depends_on(SelectionField::Experiment));
        assert!(!ChartKind::Loss.depends_on(SelectionField::Metric));
        assert!(ChartKind::Evaluation.depends_on(SelectionField::Metric));
        assert!(!ChartKind::Accuracy.depends_on(SelectionField::Evaluation));
        for kind in ChartKind::ALL {
            assert!(kind.depends_on(SelectionField::Theme));
        }
    }
}
