//! Query result model structs for the analysis database.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

/// A single (date, value) pair used for line chart data points.
///
/// `date` is in compact `YYYYMMDD` form; `value` is snow cover percent.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DateValue {
    pub date: String,
    pub value: f64,
}

/// A (date, snow %, SWE) triple for the dual-axis point analysis chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DateSnowSwe {
    pub date: String,
    pub snow_percent: f64,
    pub swe: Option<f64>,
}

/// Mean snow cover for one calendar month across the loaded run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyMeanRow {
    pub month: u32,
    pub mean: f64,
}

/// One row of the annual summary table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnnualSummaryRow {
    pub year: i32,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub count: i64,
}
