//! Chart construction rules.
//!
//! Each builder is a pure function of the dataset, the relevant selection
//! values and the theme. Rows are matched on exact experiment name and
//! plotted in table order; nothing is sorted, deduplicated or aggregated.

use crate::figure::{Axis, BarSeries, ChartSpec, Font, Layout, LineSeries, Trace};
use crate::theme::{palette_color, Theme};
use xdash_data::{Dataset, Metric, Result};

pub const LOSS_TITLE: &str = "Training and Validation Loss over Epochs";
pub const ACCURACY_TITLE: &str = "Validation Accuracy Comparison over Epochs";

/// Padding added on both sides of the evaluation bar range.
pub const BAR_RANGE_PADDING: f64 = 0.01;
/// Evaluation bar range when there are no bars.
pub const DEFAULT_BAR_RANGE: [f64; 2] = [0.0, 1.0];

fn themed_layout(title: &str, x_title: &str, y_title: &str, theme: &Theme) -> Layout {
    Layout {
        title: title.into(),
        xaxis: Axis::titled(x_title),
        yaxis: Axis::titled(y_title),
        plot_bgcolor: theme.background.to_string(),
        paper_bgcolor: theme.background.to_string(),
        font: Font {
            color: theme.text.to_string(),
        },
    }
}

/// Training and validation loss for one experiment.
///
/// Always returns exactly two series. An unknown experiment yields two empty
/// series rather than an error.
pub fn build_loss_chart(dataset: &Dataset, experiment: &str, theme: &Theme) -> ChartSpec {
    let mut training = LineSeries::new("Training Loss", palette_color(0));
    let mut validation = LineSeries::new("Validation Loss", palette_color(1));

    for row in dataset.rows_for(experiment) {
        training.push(row.epoch, row.training_loss);
        validation.push(row.epoch, row.validation_loss);
    }

    let mut chart = ChartSpec::new(themed_layout(LOSS_TITLE, "Epoch", "Loss", theme));
    chart.push(Trace::Scatter(training));
    chart.push(Trace::Scatter(validation));
    chart
}

/// Validation accuracy curves, one per listed experiment in list order.
///
/// Series `i` takes palette colour `i mod 6`. A name listed twice is drawn
/// twice; an unknown name still occupies its position with an empty series.
pub fn build_accuracy_chart<S: AsRef<str>>(
    dataset: &Dataset,
    experiments: &[S],
    theme: &Theme,
) -> ChartSpec {
    let mut chart = ChartSpec::new(themed_layout(ACCURACY_TITLE, "Epoch", "Accuracy", theme));

    for (i, experiment) in experiments.iter().enumerate() {
        let experiment = experiment.as_ref();
        let mut series = LineSeries::new(experiment, palette_color(i));
        for row in dataset.rows_for(experiment) {
            series.push(row.epoch, row.validation_accuracy);
        }
        chart.push(Trace::Scatter(series));
    }

    chart
}

/// Y range that exaggerates small differences between evaluation scores.
pub fn bar_range(values: &[f64]) -> [f64; 2] {
    if values.is_empty() {
        return DEFAULT_BAR_RANGE;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    [min - BAR_RANGE_PADDING, max + BAR_RANGE_PADDING]
}

/// One bar per listed experiment showing `metric` from its first row.
///
/// Bar `i` takes palette colour `i mod 6`, where `i` is the position in
/// `experiments`. Names absent from the dataset produce no bar. Fails with
/// [`xdash_data::DatasetError::MissingMetric`] when an experiment's first
/// row has no value for `metric`.
pub fn build_bar_chart<S: AsRef<str>>(
    dataset: &Dataset,
    experiments: &[S],
    metric: Metric,
    theme: &Theme,
) -> Result<ChartSpec> {
    let title = format!("{} for Selected Experiments", metric);
    let mut layout = themed_layout(&title, "Experiment Name", metric.column(), theme);

    let mut bars = Vec::with_capacity(experiments.len());
    let mut values = Vec::with_capacity(experiments.len());
    for (i, experiment) in experiments.iter().enumerate() {
        let experiment = experiment.as_ref();
        if let Some(value) = dataset.metric_value(experiment, metric)? {
            bars.push(Trace::Bar(BarSeries::single(experiment, value, palette_color(i))));
            values.push(value);
        }
    }

    layout.yaxis.range = Some(bar_range(&values));
    let mut chart = ChartSpec::new(layout);
    for bar in bars {
        chart.push(bar);
    }
    Ok(chart)
}
