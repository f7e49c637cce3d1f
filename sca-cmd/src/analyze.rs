//! Watershed and point analysis commands.
//!
//! Each command issues one filter + reduce query, reshapes the response
//! into the analysis table, computes the statistics blocks, and writes the
//! three report formats into the output directory.

use anyhow::Context;
use chrono::Local;
use log::info;
use sca_data::statistics::{AdvancedStatistics, AnalysisSummary};
use sca_ee::client::EngineClient;
use sca_ee::geometry::Region;
use sca_ee::query::SnowQuery;
use sca_ee::record::SnowRecord;
use sca_ee::ClientConfig;
use sca_report::{csv_export, json_report, text_summary};
use sca_utils::dates;
use std::path::Path;

/// Run the watershed analysis and write reports.
pub async fn run_watershed_analysis(
    config: ClientConfig,
    watershed: &str,
    start: &str,
    end: &str,
    out_dir: &str,
    advanced: bool,
) -> anyhow::Result<()> {
    let start_date = dates::parse_date(start)?;
    let end_date = dates::parse_date(end)?;
    let query = SnowQuery::watershed(watershed, start_date, end_date)?;
    run_analysis(config, query, out_dir, advanced).await
}

/// Run the buffered-point analysis and write reports.
pub async fn run_point_analysis(
    config: ClientConfig,
    lat: f64,
    lon: f64,
    buffer: u32,
    start: &str,
    end: &str,
    out_dir: &str,
) -> anyhow::Result<()> {
    let start_date = dates::parse_date(start)?;
    let end_date = dates::parse_date(end)?;
    let query = SnowQuery::point(lat, lon, buffer, start_date, end_date)?;
    // point analyses always carry the advanced panel, like the dashboard
    run_analysis(config, query, out_dir, true).await
}

async fn run_analysis(
    config: ClientConfig,
    query: SnowQuery,
    out_dir: &str,
    advanced: bool,
) -> anyhow::Result<()> {
    let client = EngineClient::new(config)?;
    let collection = client.reduce_collection(&query).await?;
    info!("platform processed {} images", collection.images_processed());

    let records = SnowRecord::from_feature_collection(&collection)?;
    let summary = AnalysisSummary::from_records(&records, collection.images_processed())
        .context("analysis table is empty")?;
    let advanced_stats = if advanced {
        AdvancedStatistics::from_records(&records)
    } else {
        None
    };

    let region = &query.region;
    let start = dates::format_date(&query.start_date);
    let end = dates::format_date(&query.end_date);
    let generated_at = Local::now().naive_local();

    let summary_text = text_summary::build_summary(region, &start, &end, &summary, generated_at);
    print!("{summary_text}");

    let out = Path::new(out_dir);
    std::fs::create_dir_all(out)?;

    let csv_text = csv_export::records_to_csv(&records)?;
    let csv_path = out.join(sca_report::csv_filename(region, &start, &end));
    std::fs::write(&csv_path, csv_text)?;

    let report = json_report::build_report(
        region,
        &start,
        &end,
        &summary,
        advanced_stats.as_ref(),
        generated_at,
    );
    let json_path = out.join(sca_report::json_filename(region, &start, &end));
    std::fs::write(&json_path, json_report::report_to_string(&report))?;

    let text_path = out.join(sca_report::text_filename(region, &start, &end));
    std::fs::write(&text_path, summary_text)?;

    info!(
        "reports written: {}, {}, {}",
        csv_path.display(),
        json_path.display(),
        text_path.display()
    );
    Ok(())
}
