//! Typed wrappers around Plotly.js interop via `js_sys::eval()`.
//!
//! Plotly is loaded from its CDN on demand. Figures arrive as the JSON produced
//! by [`ChartSpec::to_json`], which is also a valid JS object literal, so they
//! are spliced into the evaluated snippet without string escaping.

use wasm_bindgen::JsValue;
use xdash_chart::{ChartSpec, ChartUpdate, SelectionState, Theme};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('xdash JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Inject the Plotly script (once) and flag readiness when the global appears.
pub fn init_charts() {
    let src = serde_json::to_string(PLOTLY_CDN).unwrap_or_default();
    call_js(&format!(
        r#"
        if (typeof Plotly === 'undefined' && !document.getElementById('plotly-js')) {{
            var s = document.createElement('script');
            s.id = 'plotly-js';
            s.src = {src};
            document.head.appendChild(s);
        }}
        var waitForPlotly = setInterval(function() {{
            if (typeof Plotly !== 'undefined') {{
                clearInterval(waitForPlotly);
                window.__xdashChartsReady = true;
                console.log('xdash charts initialized');
            }}
        }}, 100);
        "#,
    ));
}

/// Draw (or redraw in place) a figure into the element with `container_id`.
///
/// Polls until Plotly has loaded and the container exists in the DOM, so it
/// is safe to call before the first render of the chart section.
pub fn render_chart(container_id: &str, figure: &ChartSpec) {
    let figure_json = match figure.to_json() {
        Ok(json) => json,
        Err(e) => {
            log::error!("failed to serialize {} figure: {}", container_id, e);
            return;
        }
    };
    call_js(&format!(
        r#"
        (function() {{
            var fig = {figure_json};
            var poll = setInterval(function() {{
                if (window.__xdashChartsReady && document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        Plotly.react('{container_id}', fig.data, fig.layout, {{responsive: true}});
                    }} catch(e) {{ console.error('[xdash] Plotly.react error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Draw every update into its chart's container.
pub fn publish(updates: &[ChartUpdate]) {
    for update in updates {
        render_chart(update.chart.container_id(), &update.figure);
    }
}

/// Clear whatever Plotly last drew into `container_id`.
pub fn purge_chart(container_id: &str) {
    call_js(&format!(
        "if (window.__xdashChartsReady && document.getElementById('{container_id}')) {{ Plotly.purge('{container_id}'); }}"
    ));
}

/// Force every control's DOM value back to `selection`.
///
/// A rejected edit leaves the rendered props unchanged, so the diff never
/// undoes what the browser already applied to the input.
pub fn sync_controls(selection: &SelectionState) {
    match controls_sync_script(selection) {
        Ok(script) => call_js(&script),
        Err(e) => log::error!("failed to serialize selection: {}", e),
    }
}

/// Snippet that writes `selection` into the selector, the metric dropdown
/// and both checklists (matched by their `data-list` attribute).
pub fn controls_sync_script(selection: &SelectionState) -> serde_json::Result<String> {
    let selection_json = serde_json::to_string(selection)?;
    Ok(format!(
        r#"
        (function() {{
            var sel = {selection_json};
            var single = document.getElementById('experiment-selector-single');
            if (single) {{ single.value = sel.experiment; }}
            var metric = document.getElementById('metric-selector');
            if (metric) {{ metric.value = sel.metric; }}
            ['comparison', 'evaluation'].forEach(function(list) {{
                document.querySelectorAll('input[data-list="' + list + '"]').forEach(function(box) {{
                    box.checked = sel[list].indexOf(box.value) !== -1;
                }});
            }});
        }})();
        "#,
    ))
}

/// Mirror the theme onto the document root so page CSS can follow it.
pub fn apply_page_theme(theme: &Theme, dark_mode: bool) {
    if let Err(e) = set_root_theme(theme, dark_mode) {
        log::warn!("failed to apply page theme: {:?}", e);
    }
}

fn set_root_theme(theme: &Theme, dark_mode: bool) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("no document element"))?;
    root.set_attribute("data-theme", if dark_mode { "dark" } else { "light" })?;
    root.set_attribute(
        "style",
        &format!("background-color: {}; color: {};", theme.background, theme.text),
    )?;
    Ok(())
}

/// Set the browser tab title.
pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xdash_data::Metric;

    fn selection() -> SelectionState {
        SelectionState {
            experiment: "MViT-Base".to_string(),
            comparison: vec!["MViT-Base".to_string(), "Distill-T2.0".to_string()],
            evaluation: vec!["Distill-T4.0".to_string()],
            metric: Metric::Precision,
            dark_mode: true,
        }
    }

    #[test]
    fn sync_script_embeds_the_selection() {
        let script = controls_sync_script(&selection()).unwrap();
        assert!(script.contains(r#""metric":"Evaluation Precision""#));
        assert!(script.contains(r#""comparison":["MViT-Base","Distill-T2.0"]"#));
        assert!(script.contains(r#""evaluation":["Distill-T4.0"]"#));
    }

    #[test]
    fn sync_script_targets_every_control() {
        let script = controls_sync_script(&selection()).unwrap();
        assert!(script.contains("experiment-selector-single"));
        assert!(script.contains("metric-selector"));
        assert!(script.contains("input[data-list="));
    }

    #[test]
    fn sync_script_escapes_experiment_names() {
        let mut sel = selection();
        sel.experiment = "it's \"quoted\"".to_string();
        let script = controls_sync_script(&sel).unwrap();
        assert!(script.contains(r#""experiment":"it's \"quoted\"""#));
    }
}
