//! Row of summary statistic metric cards.

use crate::components::MetricCard;
use crate::state::AppState;
use dioxus::prelude::*;

/// The five summary cards (mean, max, min, std dev, data points) plus an
/// images-processed line. Renders nothing until a run is loaded.
#[component]
pub fn SummaryCards() -> Element {
    let state = use_context::<AppState>();
    let Some(summary) = (state.summary)() else {
        return rsx! {};
    };

    rsx! {
        div {
            div {
                style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 12px 0;",
                MetricCard { label: "Mean".to_string(), value: format!("{:.1}%", summary.mean) }
                MetricCard { label: "Maximum".to_string(), value: format!("{:.1}%", summary.max) }
                MetricCard { label: "Minimum".to_string(), value: format!("{:.1}%", summary.min) }
                MetricCard { label: "Std Dev".to_string(), value: format!("{:.1}%", summary.std) }
                MetricCard { label: "Data Points".to_string(), value: format!("{}", summary.count) }
            }
            p {
                style: "margin: 4px 0; font-size: 12px; color: #666;",
                "Images Processed: {summary.images_processed}"
            }
        }
    }
}
