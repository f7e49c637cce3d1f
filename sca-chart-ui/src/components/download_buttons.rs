//! Download buttons for the three report formats.

use crate::downloads;
use crate::state::AppState;
use chrono::Local;
use dioxus::prelude::*;
use sca_report::{csv_export, json_report, text_summary, CSV_MIME, JSON_MIME, TEXT_MIME};

/// CSV / JSON report / text summary download buttons for the loaded run.
/// Renders nothing until an analysis has completed.
#[component]
pub fn DownloadButtons() -> Element {
    let state = use_context::<AppState>();
    let has_run = (state.region)().is_some() && (state.summary)().is_some();
    if !has_run {
        return rsx! {};
    }

    let button_style = "padding: 8px 14px; background: #2E86AB; color: white; border: none; border-radius: 4px; cursor: pointer;";

    let on_csv = move |_| {
        let Some(region) = (state.region)() else { return };
        let records = state.records.read().clone();
        match csv_export::records_to_csv(&records) {
            Ok(csv_text) => {
                let name =
                    sca_report::csv_filename(&region, &(state.start_date)(), &(state.end_date)());
                downloads::download_text(&name, CSV_MIME, &csv_text);
            }
            Err(e) => log::error!("CSV export failed: {e}"),
        }
    };

    let on_json = move |_| {
        let Some(region) = (state.region)() else { return };
        let Some(summary) = (state.summary)() else { return };
        let advanced = (state.advanced)();
        let start = (state.start_date)();
        let end = (state.end_date)();
        let report = json_report::build_report(
            &region,
            &start,
            &end,
            &summary,
            advanced.as_ref(),
            Local::now().naive_local(),
        );
        let name = sca_report::json_filename(&region, &start, &end);
        downloads::download_text(&name, JSON_MIME, &json_report::report_to_string(&report));
    };

    let on_text = move |_| {
        let Some(region) = (state.region)() else { return };
        let Some(summary) = (state.summary)() else { return };
        let start = (state.start_date)();
        let end = (state.end_date)();
        let text =
            text_summary::build_summary(&region, &start, &end, &summary, Local::now().naive_local());
        let name = sca_report::text_filename(&region, &start, &end);
        downloads::download_text(&name, TEXT_MIME, &text);
    };

    rsx! {
        div {
            style: "display: flex; gap: 12px; margin: 16px 0;",
            button { style: button_style, onclick: on_csv, "Download CSV" }
            button { style: button_style, onclick: on_json, "Download Report" }
            button { style: button_style, onclick: on_text, "Download Summary" }
        }
    }
}
