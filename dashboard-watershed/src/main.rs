//! Watershed Snow Cover Dashboard
//!
//! The user picks a watershed and a date range; the app issues one
//! server-side filter + reduce query against the satellite snow collection
//! and renders the results: metric cards, a time series chart, seasonal and
//! distribution charts, an annual summary table, and download buttons.
//!
//! Data flow:
//! 1. On mount, the watershed listing is fetched once and fills the dropdown.
//! 2. "Analyze Watershed" runs the remote query, reshapes the response into
//!    records, computes the statistics blocks, and mirrors the records into
//!    an in-memory SQLite database.
//! 3. Charts are re-sliced from the database whenever the date range
//!    changes, without refetching from the platform.

use dioxus::prelude::*;
use sca_chart_ui::components::{
    AdvancedStatsPanel, ChartContainer, ChartHeader, DateRangePicker, DownloadButtons,
    ErrorDisplay, LoadingSpinner, SummaryCards, WatershedSelector,
};
use sca_chart_ui::js_bridge;
use sca_chart_ui::state::AppState;
use sca_data::aggregation::{self, HISTOGRAM_BINS};
use sca_data::statistics::{AdvancedStatistics, AnalysisSummary};
use sca_db::Database;
use sca_ee::geometry::Region;
use sca_ee::query::SnowQuery;
use sca_ee::record::SnowRecord;
use sca_ee::web::WebEngineClient;
use sca_ee::ClientConfig;
use sca_utils::dates;

/// Chart container DOM element IDs used by D3.js to render into.
const TIME_SERIES_CHART_ID: &str = "watershed-time-series";
const SEASONAL_CHART_ID: &str = "watershed-seasonal";
const HISTOGRAM_CHART_ID: &str = "watershed-distribution";
const ANNUAL_TABLE_ID: &str = "watershed-annual-table";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("watershed-root"))
        .launch(App);
}

async fn run_analysis(
    watershed: &str,
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
        SnowQuery::watershed(watershed, start_date, end_date).map_err(|e| e.to_string())?;

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
    let mut show_advanced = use_signal(|| true);

    // Initialize the database and fetch the watershed listing once on mount
    use_effect(move || {
        spawn(async move {
            let client = WebEngineClient::new(ClientConfig::default());
            match client.list_watersheds().await {
                Ok(watersheds) => {
                    log::info!("loaded {} watersheds", watersheds.len());
                    match Database::new() {
                        Ok(db) => {
                            if let Err(e) = db.load_watersheds(&watersheds) {
                                log::error!("failed to load watersheds into DB: {e}");
                            }
                            state.db.set(Some(db));
                        }
                        Err(e) => {
                            state
                                .error_msg
                                .set(Some(format!("Database initialization failed: {e}")));
                            state.loading.set(false);
                            return;
                        }
                    }
                    if let Some(first) = watersheds.first() {
                        state.selected_watershed.set(first.clone());
                    }
                    state.watersheds.set(watersheds);
                    state.loading.set(false);
                }
                Err(e) => {
                    state
                        .error_msg
                        .set(Some(format!("Failed to load watersheds: {e}")));
                    state.loading.set(false);
                }
            }
        });
    });

    let on_analyze = move |_| {
        let watershed = (state.selected_watershed)();
        let start = (state.start_date)();
        let end = (state.end_date)();
        if watershed.is_empty() {
            return;
        }
        state.error_msg.set(None);
        state.analyzing.set(true);
        spawn(async move {
            match run_analysis(&watershed, &start, &end).await {
                Ok((region, records, summary, advanced)) => {
                    if let Some(db) = &*state.db.read() {
                        if let Err(e) = db.load_records(&records) {
                            log::error!("failed to mirror records into DB: {e}");
                        }
                    }
                    state.region.set(Some(region));
                    state.summary.set(Some(summary));
                    state
                        .advanced
                        .set(if show_advanced() { advanced } else { None });
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

    // Re-render charts whenever the loaded run or the date range changes
    use_effect(move || {
        let records = state.records.read().clone();
        let start_date = (state.start_date)();
        let end_date = (state.end_date)();
        if records.is_empty() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let summary = match (state.summary)() {
            Some(s) => s,
            None => return,
        };
        // title follows the analyzed region, not the (possibly re-picked) dropdown
        let watershed = match (state.region)() {
            Some(region) => region.label(),
            None => return,
        };

        js_bridge::init_charts();

        // Time series, sliced to the date range via SQL
        let start_compact = start_date.replace('-', "");
        let end_compact = end_date.replace('-', "");
        match db.query_time_series(&start_compact, &end_compact) {
            Ok(series) => {
                let data_json = serde_json::to_string(&series).unwrap_or_default();
                let config_json = serde_json::json!({
                    "title": format!("Snow Cover Time Series - {watershed}"),
                    "yAxisLabel": "Snow Cover (%)",
                    "yMax": 100,
                })
                .to_string();
                js_bridge::render_line_chart(TIME_SERIES_CHART_ID, &data_json, &config_json);
            }
            Err(e) => log::error!("time series query failed: {e}"),
        }

        // Seasonal bar chart from SQL monthly means
        match db.query_monthly_means() {
            Ok(rows) => {
                let with_names: Vec<serde_json::Value> = rows
                    .iter()
                    .map(|row| {
                        serde_json::json!({
                            "month": row.month,
                            "month_name": dates::month_name(row.month),
                            "mean": row.mean,
                        })
                    })
                    .collect();
                let data_json = serde_json::to_string(&with_names).unwrap_or_default();
                let config_json =
                    serde_json::json!({"title": "Seasonal Snow Cover Pattern"}).to_string();
                js_bridge::render_seasonal_chart(SEASONAL_CHART_ID, &data_json, &config_json);
            }
            Err(e) => log::error!("monthly means query failed: {e}"),
        }

        // Distribution histogram
        let bins = aggregation::histogram(&records, HISTOGRAM_BINS);
        let data_json = serde_json::to_string(&bins).unwrap_or_default();
        let config_json = serde_json::json!({
            "title": "Snow Cover Distribution",
            "mean": summary.mean,
        })
        .to_string();
        js_bridge::render_histogram_chart(HISTOGRAM_CHART_ID, &data_json, &config_json);

        // Annual summary table
        match db.query_annual_summary() {
            Ok(rows) => {
                let data_json = serde_json::to_string(&rows).unwrap_or_default();
                let config_json = serde_json::json!({
                    "columns": [
                        {"key": "year", "label": "Year"},
                        {"key": "mean", "label": "Mean (%)"},
                        {"key": "max", "label": "Max (%)"},
                        {"key": "min", "label": "Min (%)"},
                        {"key": "count", "label": "Count"},
                    ]
                })
                .to_string();
                js_bridge::render_data_table(ANNUAL_TABLE_ID, &data_json, &config_json);
            }
            Err(e) => log::error!("annual summary query failed: {e}"),
        }
    });

    let analyzing = (state.analyzing)();
    let has_results = (state.summary)().is_some();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Watershed Snow Cover Analysis".to_string(),
                subtitle: "Basin-scale snow monitoring from daily MODIS satellite data".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 8px;",
                    WatershedSelector {}
                    DateRangePicker {}
                    label {
                        style: "margin: 8px 0;",
                        input {
                            r#type: "checkbox",
                            checked: show_advanced(),
                            onchange: move |evt: Event<FormData>| show_advanced.set(evt.value() == "true"),
                        }
                        " Advanced Statistics"
                    }
                    button {
                        style: "padding: 8px 16px; background: #2E86AB; color: white; border: none; border-radius: 4px; cursor: pointer;",
                        disabled: analyzing,
                        onclick: on_analyze,
                        if analyzing { "Analyzing..." } else { "Analyze Watershed" }
                    }
                }

                if has_results {
                    SummaryCards {}

                    ChartContainer {
                        id: TIME_SERIES_CHART_ID.to_string(),
                        loading: analyzing,
                        min_height: 450,
                    }

                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 16px;",
                        div {
                            style: "flex: 1; min-width: 380px;",
                            ChartContainer {
                                id: SEASONAL_CHART_ID.to_string(),
                                min_height: 380,
                            }
                        }
                        div {
                            style: "flex: 1; min-width: 380px;",
                            ChartContainer {
                                id: HISTOGRAM_CHART_ID.to_string(),
                                min_height: 380,
                            }
                        }
                    }

                    if show_advanced() {
                        AdvancedStatsPanel {}
                    }

                    h4 { style: "margin: 16px 0 4px 0;", "Annual Summary" }
                    div { id: ANNUAL_TABLE_ID }

                    DownloadButtons {}
                }
            }
        }
    }
}
