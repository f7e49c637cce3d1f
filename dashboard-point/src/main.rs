//! Point Snow Analysis Dashboard
//!
//! The user enters a coordinate and a buffer radius; the app reduces the
//! satellite snow collection over the buffered point and renders a
//! dual-axis chart (snow cover % and the rough SWE estimate), the advanced
//! statistics panel, and download buttons.
//!
//! Near-duplicate of the watershed dashboard, differing in the spatial
//! selection mode: manual lat/lon + buffer instead of a watershed dropdown.

use dioxus::prelude::*;
use sca_chart_ui::components::{
    AdvancedStatsPanel, BufferSlider, ChartContainer, ChartHeader, CoordinateInput,
    DateRangePicker, DownloadButtons, ErrorDisplay, SummaryCards,
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

/// Chart container DOM element ID used by D3.js to render into.
const DUAL_AXIS_CHART_ID: &str = "point-dual-axis";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("point-root"))
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

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    let on_analyze = move |_| {
        let lat = (state.lat)();
        let lon = (state.lon)();
        let buffer_m = (state.buffer_m)();
        let start = (state.start_date)();
        let end = (state.end_date)();
        state.error_msg.set(None);
        state.analyzing.set(true);
        spawn(async move {
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
    };

    // Re-render the chart whenever the loaded run or the date range changes
    use_effect(move || {
        let records = state.records.read();
        let start_date = (state.start_date)();
        let end_date = (state.end_date)();
        if records.is_empty() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let lat = (state.lat)();
        let lon = (state.lon)();

        js_bridge::init_charts();

        let start_compact = start_date.replace('-', "");
        let end_compact = end_date.replace('-', "");
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

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Point Snow Analysis".to_string(),
                subtitle: "Snow cover and SWE estimate at any coordinate, from daily MODIS satellite data".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 8px;",
                CoordinateInput {}
                BufferSlider {}
                DateRangePicker {}
                button {
                    style: "padding: 8px 16px; background: #2E86AB; color: white; border: none; border-radius: 4px; cursor: pointer;",
                    disabled: analyzing,
                    onclick: on_analyze,
                    if analyzing { "Analyzing..." } else { "Analyze Point" }
                }
            }

            if has_results {
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
