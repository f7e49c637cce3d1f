//! Report generation for snow cover analyses.
//!
//! Three user-triggered export formats, all generated synchronously from
//! the in-memory analysis table:
//! - CSV: the flat record table ([`csv_export`])
//! - JSON: nested report with a statistics block and an ISO timestamp
//!   ([`json_report`])
//! - plain text: fixed-format summary ([`text_summary`])
//!
//! There is no versioning or schema evolution; the formats are what they
//! are and downloads are fire-and-forget.

pub mod csv_export;
pub mod json_report;
pub mod text_summary;

use sca_ee::geometry::Region;

/// MIME type for the CSV export.
pub const CSV_MIME: &str = "text/csv";
/// MIME type for the JSON report.
pub const JSON_MIME: &str = "application/json";
/// MIME type for the text summary.
pub const TEXT_MIME: &str = "text/plain";

/// Suggested filename for the CSV export.
pub fn csv_filename(region: &Region, start: &str, end: &str) -> String {
    format!("snow_data_{}_{}_{}.csv", region.label(), start, end)
}

/// Suggested filename for the JSON report.
pub fn json_filename(region: &Region, start: &str, end: &str) -> String {
    format!("report_{}_{}_{}.json", region.label(), start, end)
}

/// Suggested filename for the text summary.
pub fn text_filename(region: &Region, start: &str, end: &str) -> String {
    format!("summary_{}_{}_{}.txt", region.label(), start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sca_ee::geometry::Region;

    #[test]
    fn test_filenames() {
        let region = Region::watershed("Elbow");
        assert_eq!(
            csv_filename(&region, "2022-01-01", "2023-12-31"),
            "snow_data_Elbow_2022-01-01_2023-12-31.csv"
        );
        assert_eq!(
            json_filename(&region, "2022-01-01", "2023-12-31"),
            "report_Elbow_2022-01-01_2023-12-31.json"
        );
        assert_eq!(
            text_filename(&region, "2022-01-01", "2023-12-31"),
            "summary_Elbow_2022-01-01_2023-12-31.txt"
        );
    }
}
