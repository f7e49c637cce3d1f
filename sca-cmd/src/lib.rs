//! Command implementations for the SCA CLI.
//!
//! Provides subcommands for listing watersheds and running watershed or
//! point snow cover analyses against the remote platform, writing the
//! CSV / JSON / text reports to disk.

use clap::Subcommand;
use sca_ee::ClientConfig;

pub mod analyze;
pub mod listing;

#[derive(Subcommand)]
pub enum Command {
    /// List watershed names from the boundary asset
    Watersheds,

    /// Analyze snow cover over a named watershed
    AnalyzeWatershed {
        /// Watershed name as listed by the `watersheds` command
        #[arg(short, long)]
        watershed: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: String,

        /// Directory the reports are written into
        #[arg(short, long, default_value = ".")]
        out_dir: String,

        /// Include the advanced statistics block in the JSON report
        #[arg(long)]
        advanced: bool,
    },

    /// Analyze snow cover around a buffered point
    AnalyzePoint {
        /// Latitude in decimal degrees
        #[arg(long)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long)]
        lon: f64,

        /// Buffer radius in meters
        #[arg(long, default_value_t = 1000)]
        buffer: u32,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: String,

        /// Directory the reports are written into
        #[arg(short, long, default_value = ".")]
        out_dir: String,
    },
}

pub async fn run(config: ClientConfig, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Watersheds => listing::run_watersheds(config).await,
        Command::AnalyzeWatershed {
            watershed,
            start,
            end,
            out_dir,
            advanced,
        } => analyze::run_watershed_analysis(config, &watershed, &start, &end, &out_dir, advanced).await,
        Command::AnalyzePoint {
            lat,
            lon,
            buffer,
            start,
            end,
            out_dir,
        } => analyze::run_point_analysis(config, lat, lon, buffer, &start, &end, &out_dir).await,
    }
}
