//! The dashboard page served at `/`.
//!
//! A static shell plus a small vanilla JS client. The client keeps the
//! current selection, posts each control change to `/api/dispatch` and hands
//! the returned figures to `Plotly.react`.

const TITLE_PLACEHOLDER: &str = "{{TITLE}}";

/// Render the page with `title` in the browser tab.
pub fn render_index(title: &str) -> String {
    INDEX_HTML.replace(TITLE_PLACEHOLDER, &escape_html(title))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{TITLE}}</title>
  <link href="https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;500&display=swap" rel="stylesheet">
  <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
  <style>
    body { font-family: 'Poppins', sans-serif; margin: 0; padding: 0; }
    .header { padding: 15px 20px; display: flex; justify-content: space-between; align-items: center; border-bottom: 2px solid #CCCCCC; line-height: 1.2; }
    .header .line { font-style: italic; font-size: 14px; }
    .switch-container { display: flex; align-items: center; justify-content: flex-end; }
    .switch-label { margin-right: 10px; font-size: 14px; }
    #dark-mode-switch { background-color: #4C72B0; color: white; border: none; padding: 6px 16px; border-radius: 12px; cursor: pointer; }
    #dark-mode-switch:hover { background-color: #55A868; }
    .main-title { text-align: center; margin-bottom: 20px; font-size: 24px; font-weight: bold; }
    .control { width: 50%; margin: auto; padding: 20px; }
    .control label.title { font-weight: bold; display: block; }
    .control select { width: 100%; margin: 10px 0; }
    .checklist { display: flex; flex-wrap: wrap; gap: 12px; margin: 10px 0; }
    .dash-graph { min-height: 450px; margin: 12px 0; border-radius: 8px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
    .chart-error { display: none; padding: 8px 16px; margin: 8px 0; background: #FFEBEE; color: #C44E52; border-radius: 8px; border: 1px solid #EF9A9A; }
    #error { display: none; padding: 12px 16px; margin: 8px auto; max-width: 900px; background: #FFEBEE; color: #C44E52; border-radius: 8px; border: 1px solid #EF9A9A; }
  </style>
</head>
<body>
  <div id="header" class="header">
    <div>
      <div class="line">Thesis: Distillation of Violence Detection in Surveillance Videos Based on MViT Model</div>
      <div class="line">Author: Dan Santivañez Gutarra</div>
    </div>
    <div class="switch-container">
      <span class="switch-label">Dark Mode</span>
      <button id="dark-mode-switch">On</button>
    </div>
  </div>
  <div id="error"></div>
  <div id="main-content" style="padding: 20px;">
    <h1 id="main-title" class="main-title">Multiescale Vision Transformer (MViT) Master Model Experiments</h1>

    <div class="control">
      <label class="title" for="experiment-selector-single">Select Experiment for Training and Validation Loss:</label>
      <select id="experiment-selector-single"></select>
    </div>
    <div id="loss-graph-error" class="chart-error"></div>
    <div id="loss-graph" class="dash-graph"></div>

    <div class="control">
      <label class="title">Select Experiments for Validation Accuracy Comparison:</label>
      <div id="experiment-selector-multiple" class="checklist"></div>
    </div>
    <div id="accuracy-graph-error" class="chart-error"></div>
    <div id="accuracy-graph" class="dash-graph"></div>

    <div class="control">
      <label class="title">Select Experiments for Evaluation Metrics:</label>
      <div id="experiment-selector-distribution" class="checklist"></div>
      <label class="title" for="metric-selector">Select Metric for Bar Chart:</label>
      <select id="metric-selector"></select>
    </div>
    <div id="evaluation-bar-chart-error" class="chart-error"></div>
    <div id="evaluation-bar-chart" class="dash-graph"></div>
  </div>

  <script>
    const CONTAINERS = { loss: 'loss-graph', accuracy: 'accuracy-graph', evaluation: 'evaluation-bar-chart' };
    const LABELS = { loss: 'Loss', accuracy: 'Accuracy', evaluation: 'Evaluation' };
    const app = { selection: null, experiments: [], metrics: [], themes: null };

    async function postJson(url, body) {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(body),
      });
      const text = await res.text();
      let payload = null;
      try { payload = JSON.parse(text); } catch (e) { payload = { error: text }; }
      if (!res.ok) throw new Error((payload && payload.error) || res.statusText);
      return payload;
    }

    function showError(message) {
      const el = document.getElementById('error');
      el.style.display = message ? 'block' : 'none';
      el.textContent = message ? 'Data error: ' + message : '';
    }

    function setChartError(chart, message) {
      const el = document.getElementById(CONTAINERS[chart] + '-error');
      el.style.display = message ? 'block' : 'none';
      el.textContent = message ? LABELS[chart] + ' chart unavailable: ' + message : '';
    }

    function draw(res) {
      for (const update of res.updates) {
        setChartError(update.chart, null);
        Plotly.react(CONTAINERS[update.chart], update.figure.data, update.figure.layout, { responsive: true });
      }
      for (const failure of res.errors) {
        setChartError(failure.chart, failure.message);
        Plotly.purge(CONTAINERS[failure.chart]);
      }
    }

    function applyTheme() {
      const theme = app.selection.dark_mode ? app.themes.dark : app.themes.light;
      document.body.style.backgroundColor = theme.background;
      document.body.style.color = theme.text;
      document.getElementById('header').style.backgroundColor = theme.header;
      document.getElementById('dark-mode-switch').textContent = app.selection.dark_mode ? 'On' : 'Off';
    }

    function fillSelect(id, values, selected, onChange) {
      const select = document.getElementById(id);
      select.innerHTML = '';
      for (const value of values) {
        const option = document.createElement('option');
        option.value = value;
        option.textContent = value;
        option.selected = value === selected;
        select.appendChild(option);
      }
      select.onchange = () => onChange(select.value);
    }

    function toggle(list, name) {
      return list.includes(name) ? list.filter((e) => e !== name) : list.concat([name]);
    }

    function fillChecklist(id, field) {
      const container = document.getElementById(id);
      container.innerHTML = '';
      for (const name of app.experiments) {
        const label = document.createElement('label');
        const box = document.createElement('input');
        box.type = 'checkbox';
        box.checked = app.selection[field].includes(name);
        box.onclick = () => send({ field: field, value: toggle(app.selection[field], name) });
        label.appendChild(box);
        label.appendChild(document.createTextNode(' ' + name));
        container.appendChild(label);
      }
    }

    function renderControls() {
      fillSelect('experiment-selector-single', app.experiments, app.selection.experiment,
        (value) => send({ field: 'experiment', value: value }));
      fillChecklist('experiment-selector-multiple', 'comparison');
      fillChecklist('experiment-selector-distribution', 'evaluation');
      fillSelect('metric-selector', app.metrics, app.selection.metric,
        (value) => send({ field: 'metric', value: value }));
      applyTheme();
    }

    async function send(event) {
      try {
        const res = await postJson('/api/dispatch', { selection: app.selection, event: event });
        app.selection = res.selection;
        draw(res);
        showError(null);
      } catch (e) {
        showError(e.message);
      }
      renderControls();
    }

    async function init() {
      const info = await (await fetch('/api/experiments')).json();
      app.selection = info.selection;
      app.experiments = info.experiments;
      app.metrics = info.metrics;
      app.themes = info.themes;
      document.getElementById('dark-mode-switch').onclick =
        () => send({ field: 'dark_mode', value: !app.selection.dark_mode });
      renderControls();
      try {
        const res = await postJson('/api/charts', app.selection);
        draw(res);
      } catch (e) {
        showError(e.message);
      }
    }

    init();
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use xdash_chart::ChartKind;

    #[test]
    fn title_is_substituted_and_escaped() {
        let html = render_index("Runs <2024> & \"ablations\"");
        assert!(html.contains("<title>Runs &lt;2024&gt; &amp; &quot;ablations&quot;</title>"));
        assert!(!html.contains(TITLE_PLACEHOLDER));
    }

    #[test]
    fn page_has_a_container_per_chart() {
        let html = render_index("Experiments");
        for kind in ChartKind::ALL {
            assert!(html.contains(&format!("id=\"{}\"", kind.container_id())));
            assert!(html.contains(&format!("id=\"{}-error\"", kind.container_id())));
        }
    }
}
