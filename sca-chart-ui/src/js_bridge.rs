//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at
//! runtime. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module provides safe Rust wrappers that serialize data
//! and call those globals.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static SEASONAL_CHART_JS: &str = include_str!("../assets/js/seasonal-chart.js");
static HISTOGRAM_CHART_JS: &str = include_str!("../assets/js/histogram-chart.js");
static DUAL_AXIS_CHART_JS: &str = include_str!("../assets/js/dual-axis-chart.js");
static WATERSHED_MAP_JS: &str = include_str!("../assets/js/watershed-map.js");
static DATA_TABLE_JS: &str = include_str!("../assets/js/data-table.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SCA JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderLineChart(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via indirect eval once D3 is ready, and then explicitly
/// promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        LINE_CHART_JS,
        SEASONAL_CHART_JS,
        HISTOGRAM_CHART_JS,
        DUAL_AXIS_CHART_JS,
        WATERSHED_MAP_JS,
        DATA_TABLE_JS,
    ]
    .join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__scaChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__scaChartsReady) { delete window.__scaChartScripts; return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__scaChartScripts);
                    delete window.__scaChartScripts;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof destroyLineChart !== 'undefined') window.destroyLineChart = destroyLineChart;
                    if (typeof renderSeasonalChart !== 'undefined') window.renderSeasonalChart = renderSeasonalChart;
                    if (typeof renderHistogramChart !== 'undefined') window.renderHistogramChart = renderHistogramChart;
                    if (typeof renderDualAxisChart !== 'undefined') window.renderDualAxisChart = renderDualAxisChart;
                    if (typeof renderWatershedMap !== 'undefined') window.renderWatershedMap = renderWatershedMap;
                    if (typeof renderDataTable !== 'undefined') window.renderDataTable = renderDataTable;
                    window.__scaChartsReady = true;
                    console.log('SCA charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render into `container_id` by calling the given window-scoped chart
/// function once D3, the chart scripts, and the container DOM element are
/// all ready.
fn render_when_ready(function_name: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__scaChartsReady &&
                    typeof window.{function_name} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function_name}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[SCA] {function_name} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the snow cover time series line chart.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Render the seasonal pattern bar chart.
pub fn render_seasonal_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderSeasonalChart", container_id, data_json, config_json);
}

/// Render the distribution histogram.
pub fn render_histogram_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderHistogramChart", container_id, data_json, config_json);
}

/// Render the dual-axis snow % / SWE chart.
pub fn render_dual_axis_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderDualAxisChart", container_id, data_json, config_json);
}

/// Render the watershed boundary map.
pub fn render_watershed_map(container_id: &str, geojson: &str, config_json: &str) {
    render_when_ready("renderWatershedMap", container_id, geojson, config_json);
}

/// Render a data table.
pub fn render_data_table(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderDataTable", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Register the map click callback.
///
/// The watershed map JS calls `window.__scaOnMapClick(lat, lon)` whenever
/// the user clicks the map. The closure is leaked intentionally; it lives
/// for the lifetime of the page.
pub fn set_map_click_handler(handler: impl FnMut(f64, f64) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(f64, f64)>);
    let Some(window) = web_sys::window() else {
        log::error!("no window object; map clicks disabled");
        return;
    };
    if js_sys::Reflect::set(
        window.as_ref(),
        &JsValue::from_str("__scaOnMapClick"),
        closure.as_ref(),
    )
    .is_err()
    {
        log::error!("failed to register map click handler");
        return;
    }
    closure.forget();
}
