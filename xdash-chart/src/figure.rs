//! Declarative chart model.
//!
//! A [`ChartSpec`] is plain data: traces plus layout. It serializes to the
//! Plotly figure shape (`{"data": [...], "layout": {...}}`) so the rendering
//! surface can hand it to `Plotly.react` without further translation.

use serde::{Deserialize, Serialize};

/// Plotly mode for line series with a marker at every point.
pub const LINES_MARKERS: &str = "lines+markers";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl ChartSpec {
    /// A chart with no traces yet.
    pub fn new(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    pub fn push(&mut self, trace: Trace) {
        self.data.push(trace);
    }

    pub fn traces(&self) -> &[Trace] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Serialize to the Plotly figure JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(LineSeries),
    Bar(BarSeries),
}

impl Trace {
    pub fn name(&self) -> &str {
        match self {
            Trace::Scatter(s) => &s.name,
            Trace::Bar(b) => &b.name,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Trace::Scatter(s) => &s.line.color,
            Trace::Bar(b) => &b.marker.color,
        }
    }

    pub fn as_line(&self) -> Option<&LineSeries> {
        match self {
            Trace::Scatter(s) => Some(s),
            Trace::Bar(_) => None,
        }
    }

    pub fn as_bar(&self) -> Option<&BarSeries> {
        match self {
            Trace::Bar(b) => Some(b),
            Trace::Scatter(_) => None,
        }
    }
}

/// Metric-over-epochs series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub mode: String,
    pub x: Vec<u32>,
    pub y: Vec<f64>,
    pub line: LineStyle,
}

impl LineSeries {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: LINES_MARKERS.to_string(),
            x: Vec::new(),
            y: Vec::new(),
            line: LineStyle {
                color: color.into(),
            },
        }
    }

    pub fn push(&mut self, epoch: u32, value: f64) {
        self.x.push(epoch);
        self.y.push(value);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
}

/// A single labelled bar. Each experiment gets its own trace so it keeps
/// its own colour and legend entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub marker: MarkerStyle,
}

impl BarSeries {
    pub fn single(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            x: vec![name.clone()],
            y: vec![value],
            name,
            marker: MarkerStyle {
                color: color.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
    /// Fixed `[min, max]`; autoscaled when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

impl Axis {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.into(),
            range: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn layout() -> Layout {
        Layout {
            title: "Loss".into(),
            xaxis: Axis::titled("Epoch"),
            yaxis: Axis {
                title: "Loss".into(),
                range: Some([0.0, 1.0]),
            },
            plot_bgcolor: "#FFFFFF".to_string(),
            paper_bgcolor: "#FFFFFF".to_string(),
            font: Font {
                color: "#000000".to_string(),
            },
        }
    }

    #[test]
    fn serializes_to_plotly_figure_shape() {
        let mut chart = ChartSpec::new(layout());
        let mut line = LineSeries::new("Training Loss", "#4C72B0");
        line.push(1, 0.9);
        chart.push(Trace::Scatter(line));
        chart.push(Trace::Bar(BarSeries::single("Exp-A", 0.8, "#DD8452")));

        let value: serde_json::Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();
        assert_eq!(
            value["data"][0],
            json!({
                "type": "scatter",
                "name": "Training Loss",
                "mode": "lines+markers",
                "x": [1],
                "y": [0.9],
                "line": {"color": "#4C72B0"},
            })
        );
        assert_eq!(
            value["data"][1],
            json!({
                "type": "bar",
                "name": "Exp-A",
                "x": ["Exp-A"],
                "y": [0.8],
                "marker": {"color": "#DD8452"},
            })
        );
        assert_eq!(value["layout"]["title"]["text"], "Loss");
        assert_eq!(value["layout"]["yaxis"]["range"], json!([0.0, 1.0]));
        assert_eq!(value["layout"]["font"]["color"], "#000000");
    }

    #[test]
    fn autoscaled_axis_omits_range() {
        let chart = ChartSpec::new(layout());
        let value = serde_json::to_value(&chart).unwrap();
        assert!(value["layout"]["xaxis"].get("range").is_none());
    }

    #[test]
    fn trace_accessors() {
        let bar = Trace::Bar(BarSeries::single("Exp-B", 0.5, "#55A868"));
        assert_eq!(bar.name(), "Exp-B");
        assert_eq!(bar.color(), "#55A868");
        assert!(bar.as_line().is_none());
        assert_eq!(bar.as_bar().unwrap().x, vec!["Exp-B".to_string()]);
    }
}
