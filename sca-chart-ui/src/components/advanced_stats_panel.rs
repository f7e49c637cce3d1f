//! Advanced statistics panel: quartiles, persistence, and peak timing.

use crate::components::MetricCard;
use crate::state::AppState;
use dioxus::prelude::*;

/// Metric card rows for the advanced statistics of the loaded run.
/// Renders nothing until the advanced panel has been computed.
#[component]
pub fn AdvancedStatsPanel() -> Element {
    let state = use_context::<AppState>();
    let Some(stats) = (state.advanced)() else {
        return rsx! {};
    };
    let basic = &stats.basic;
    let persistence = &stats.persistence;
    let peak = &stats.peak_timing;

    rsx! {
        div {
            h4 { style: "margin: 16px 0 4px 0;", "Statistical Summary" }
            div {
                style: "display: flex; gap: 12px; flex-wrap: wrap;",
                MetricCard { label: "Mean".to_string(), value: format!("{:.1}%", basic.mean) }
                MetricCard { label: "Median".to_string(), value: format!("{:.1}%", basic.median) }
                MetricCard { label: "Std Dev".to_string(), value: format!("{:.1}%", basic.std) }
                MetricCard { label: "Q25-Q75".to_string(), value: format!("{:.1}-{:.1}%", basic.q25, basic.q75) }
                MetricCard { label: "Range".to_string(), value: format!("{:.1}%", basic.max - basic.min) }
            }

            h4 { style: "margin: 16px 0 4px 0;", "Snow Persistence" }
            div {
                style: "display: flex; gap: 12px; flex-wrap: wrap;",
                MetricCard { label: "High Snow Days".to_string(), value: format!("{}", persistence.high_snow_days) }
                MetricCard { label: "Total Days".to_string(), value: format!("{}", persistence.total_days) }
                MetricCard { label: "Persistence Ratio".to_string(), value: format!("{:.1}%", persistence.persistence_ratio * 100.0) }
            }

            h4 { style: "margin: 16px 0 4px 0;", "Peak Snow" }
            div {
                style: "display: flex; gap: 12px; flex-wrap: wrap;",
                MetricCard { label: "Peak Date".to_string(), value: peak.peak_date.format("%Y-%m-%d").to_string() }
                MetricCard { label: "Day of Year".to_string(), value: format!("{}", peak.peak_doy) }
                MetricCard { label: "Peak Value".to_string(), value: format!("{:.1}%", peak.peak_value) }
            }
        }
    }
}
