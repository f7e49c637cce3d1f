//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. Each user interaction that changes a signal
//! re-runs the effects that depend on it, which is the only scheduling the
//! dashboards have: one blocking analysis at a time, re-rendered from state.

use dioxus::prelude::*;
use sca_data::statistics::{AdvancedStatistics, AnalysisSummary};
use sca_db::Database;
use sca_ee::geometry::Region;
use sca_ee::record::SnowRecord;

/// Default analysis window start.
pub const DEFAULT_START_DATE: &str = "2022-01-01";
/// Default analysis window end.
pub const DEFAULT_END_DATE: &str = "2023-12-31";
/// Earliest selectable date (start of the satellite record).
pub const MIN_DATE: &str = "2000-01-01";

/// Default point analysis coordinate (Banff, Alberta).
pub const DEFAULT_LAT: f64 = 51.1784;
pub const DEFAULT_LON: f64 = -115.5708;

/// Buffer slider bounds and default, in meters.
pub const MIN_BUFFER_M: u32 = 500;
pub const MAX_BUFFER_M: u32 = 5000;
pub const BUFFER_STEP_M: u32 = 500;
pub const DEFAULT_BUFFER_M: u32 = 1000;

/// Shared application state for all SCA dashboard apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading its initial data
    pub loading: Signal<bool>,
    /// Whether an analysis query is in flight
    pub analyzing: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Available watershed names for the dropdown
    pub watersheds: Signal<Vec<String>>,
    /// Currently selected watershed name
    pub selected_watershed: Signal<String>,
    /// Start date for the analysis window (YYYY-MM-DD)
    pub start_date: Signal<String>,
    /// End date for the analysis window (YYYY-MM-DD)
    pub end_date: Signal<String>,
    /// Point analysis latitude
    pub lat: Signal<f64>,
    /// Point analysis longitude
    pub lon: Signal<f64>,
    /// Point analysis buffer radius in meters
    pub buffer_m: Signal<u32>,
    /// Region of the loaded analysis run (None until one completes)
    pub region: Signal<Option<Region>>,
    /// Reshaped records of the loaded run
    pub records: Signal<Vec<SnowRecord>>,
    /// Summary statistics block of the loaded run
    pub summary: Signal<Option<AnalysisSummary>>,
    /// Advanced statistics of the loaded run
    pub advanced: Signal<Option<AdvancedStatistics>>,
    /// In-memory database mirroring the loaded run
    pub db: Signal<Option<Database>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            analyzing: Signal::new(false),
            error_msg: Signal::new(None),
            watersheds: Signal::new(Vec::new()),
            selected_watershed: Signal::new(String::new()),
            start_date: Signal::new(DEFAULT_START_DATE.to_string()),
            end_date: Signal::new(DEFAULT_END_DATE.to_string()),
            lat: Signal::new(DEFAULT_LAT),
            lon: Signal::new(DEFAULT_LON),
            buffer_m: Signal::new(DEFAULT_BUFFER_M),
            region: Signal::new(None),
            records: Signal::new(Vec::new()),
            summary: Signal::new(None),
            advanced: Signal::new(None),
            db: Signal::new(None),
        }
    }
}
