//! Interactive Snow Analysis Map
//!
//! Renders the watershed boundary collection on a D3 map. Clicking
//! anywhere on the map runs a point analysis at the clicked coordinate
//! with the default buffer and shows the dual-axis chart, statistics, and
//! download buttons below the map.
//!
//! Near-duplicate of the point dashboard: the map click replaces the
//! manual coordinate inputs.

use dioxus::prelude::*;
use sca_chart_ui::components::{
    AdvancedStatsPanel, ChartContainer, ChartHeader, DateRangePicker, DownloadButtons,
    ErrorDisplay, LoadingSpinner, SummaryCards,
};
use sca_chart_ui::js_bridge;
use sca_chart_ui::state::AppState;
use sca_data::statistics::{AdvancedStatistics, AnalysisSummary};
use sca_db::Database;
use sca_ee::geometry::Region;
use sca_ee::query::SnowQuery;
use sca_ee::record::SnowRecord;
use sca_ee::web::WebEngineClient;
use sca_ee::ClientConfig;
use sca_utils::dates;

/// Chart container DOM element IDs used by D3.js to render into.
const MAP_ID: &str = "watershed-map";
const DUAL_AXIS_CHART_ID: &str = "map-point-dual-axis";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("map-root"))
        .launch(App);
}

async fn run_analysis(
    lat: f64,
    lon: f64,
    buffer_m: u32,
    start: &str,
    end: &str,
) -> Result<
    (
        Region,
        Vec<SnowRecord>,
        AnalysisSummary,
        Option<AdvancedStatistics>,
    ),
    String,
> {
    let start_date = dates::parse_date(start).map_err(|e| format!("Invalid start date: {e}"))?;
    let end_date = dates::parse_date(end).map_err(|e| format!("Invalid end date: {e}"))?;
    let query =
        SnowQuery::point(lat, lon, buffer_m, start_date, end_date).map_err(|e| e.to_string())?;

    let client = WebEngineClient::new(ClientConfig::default());
    let collection = client
        .reduce_collection(&query)
        .await
        .map_err(|e| format!("Analysis failed: {e}"))?;
    let records = SnowRecord::from_feature_collection(&collection).map_err(|e| {
        if e.is_no_data() {
            e.to_string()
        } else {
            format!("Analysis failed: {e}")
        }
    })?;
    let summary = AnalysisSummary::from_records(&records, collection.images_processed())
        .ok_or_else(|| "No valid snow cover data found".to_string())?;
    let advanced = AdvancedStatistics::from_records(&records);
    Ok((query.region, records, summary, advanced))
}

/// Runs on a map click, which arrives from JS outside any Dioxus scope, so
/// the analysis future goes through `spawn_local` instead of Dioxus `spawn`.
fn analyze_clicked_point(mut state: AppState, lat: f64, lon: f64) {
    state.lat.set(lat);
    state.lon.set(lon);
    state.error_msg.set(None);
    state.analyzing.set(true);
    let buffer_m = (state.buffer_m)();
    let start = (state.start_date)();
    let end = (state.end_date)();
    wasm_bindgen_futures::spawn_local(async move {
        match run_analysis(lat, lon, buffer_m, &start, &end).await {
            Ok((region, records, summary, advanced)) => {
                match Database::new() {
                    Ok(db) => {
                        if let Err(e) = db.load_records(&records) {
                            log::error!("failed to mirror records into DB: {e}");
                        }
                        state.db.set(Some(db));
                    }
                    Err(e) => log::error!("database initialization failed: {e}"),
                }
                state.region.set(Some(region));
                state.summary.set(Some(summary));
                state.advanced.set(advanced);
                state.records.set(records);
            }
            Err(message) => {
                state.error_msg.set(Some(message));
                state.region.set(None);
                state.summary.set(None);
                state.advanced.set(None);
                state.records.set(Vec::new());
            }
        }
        state.analyzing.set(false);
    });
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Fetch the boundary collection once on mount, render the map, and
    // register the click-to-analyze callback
    use_effect(move || {
        js_bridge::init_charts();
        js_bridge::set_map_click_handler(move |lat, lon| {
            log::info!("map click at {lat:.4}, {lon:.4}");
            analyze_clicked_point(state, lat, lon);
        });
        spawn(async move {
            let client = WebEngineClient::new(ClientConfig::default());
            match client.watershed_boundaries().await {
                Ok(boundaries) => {
                    let config_json = serde_json::json!({
                        "title": "Click anywhere to analyze snow cover at that point",
                    })
                    .to_string();
                    js_bridge::render_watershed_map(
                        MAP_ID,
                        &boundaries.to_string(),
                        &config_json,
                    );
                    state.loading.set(false);
                }
                Err(e) => {
                    state
                        .error_msg
                        .set(Some(format!("Could not load watershed boundaries: {e}")));
                    state.loading.set(false);
                }
            }
        });
    });

    // Re-render the point chart whenever the loaded run changes
    use_effect(move || {
        let records = state.records.read();
        if records.is_empty() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let lat = (state.lat)();
        let lon = (state.lon)();
        let start_compact = (state.start_date)().replace('-', "");
        let end_compact = (state.end_date)().replace('-', "");

        match db.query_records(&start_compact, &end_compact) {
            Ok(rows) => {
                let data_json = serde_json::to_string(&rows).unwrap_or_default();
                let config_json = serde_json::json!({
                    "title": format!("Snow Analysis at Point ({lat:.3}, {lon:.3})"),
                })
                .to_string();
                js_bridge::render_dual_axis_chart(DUAL_AXIS_CHART_ID, &data_json, &config_json);
            }
            Err(e) => log::error!("record query failed: {e}"),
        }
    });

    let analyzing = (state.analyzing)();
    let has_results = (state.summary)().is_some();
    let lat = (state.lat)();
    let lon = (state.lon)();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Interactive Snow Analysis Map".to_string(),
                subtitle: "Click anywhere on the map to analyze snow cover at that point".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 8px;",
                DateRangePicker {}
            }

            if (state.loading)() {
                LoadingSpinner {}
            }
            div { id: MAP_ID, style: "width: 100%;" }

            if analyzing {
                p {
                    style: "color: #666;",
                    "Analyzing point ({lat:.4}, {lon:.4})..."
                }
            }

            if has_results {
                h3 { style: "margin: 16px 0 4px 0;", "Point Analysis Results ({lat:.4}, {lon:.4})" }
                SummaryCards {}

                ChartContainer {
                    id: DUAL_AXIS_CHART_ID.to_string(),
                    loading: analyzing,
                    min_height: 450,
                }

                AdvancedStatsPanel {}

                DownloadButtons {}
            }
        }
    }
}
