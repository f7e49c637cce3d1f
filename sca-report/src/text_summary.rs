//! Fixed-format plain-text summary.

use chrono::NaiveDateTime;
use sca_data::statistics::AnalysisSummary;
use sca_ee::geometry::Region;
use sca_ee::{PIXEL_SCALE_M, SNOW_COLLECTION, SNOW_THRESHOLD};

/// Render the downloadable text summary.
///
/// The layout is fixed: header, region and period lines, a STATISTICS
/// block with one-decimal percentages, and a data-source footer.
pub fn build_summary(
    region: &Region,
    start_date: &str,
    end_date: &str,
    summary: &AnalysisSummary,
    generated_at: NaiveDateTime,
) -> String {
    format!(
        "Snow Cover Analysis Report\n\
         Region: {region}\n\
         Period: {start_date} to {end_date}\n\
         Generated: {generated}\n\
         \n\
         STATISTICS:\n\
         Mean Snow Cover: {mean:.1}%\n\
         Maximum: {max:.1}%\n\
         Minimum: {min:.1}%\n\
         Standard Deviation: {std:.1}%\n\
         Data Points: {count}\n\
         Images Processed: {images}\n\
         \n\
         DATA SOURCE: {source}\n\
         SPATIAL RESOLUTION: {scale}m\n\
         SNOW THRESHOLD: NDSI >= {threshold}\n",
        region = region.label(),
        generated = generated_at.format("%Y-%m-%d %H:%M:%S"),
        mean = summary.mean,
        max = summary.max,
        min = summary.min,
        std = summary.std,
        count = summary.count,
        images = summary.images_processed,
        source = SNOW_COLLECTION,
        scale = PIXEL_SCALE_M,
        threshold = SNOW_THRESHOLD as i64,
    )
}

#[cfg(test)]
mod tests {
    use super::build_summary;
    use chrono::NaiveDate;
    use sca_data::statistics::AnalysisSummary;
    use sca_ee::geometry::Region;

    #[test]
    fn test_summary_layout() {
        let summary = AnalysisSummary {
            mean: 48.04,
            max: 90.0,
            min: 0.0,
            std: 39.62,
            count: 5,
            images_processed: 7,
        };
        let generated = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let text = build_summary(
            &Region::watershed("Elbow"),
            "2022-01-01",
            "2023-12-31",
            &summary,
            generated,
        );

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Snow Cover Analysis Report");
        assert_eq!(lines[1], "Region: Elbow");
        assert_eq!(lines[2], "Period: 2022-01-01 to 2023-12-31");
        assert_eq!(lines[3], "Generated: 2024-03-01 12:30:00");
        assert!(text.contains("Mean Snow Cover: 48.0%"));
        assert!(text.contains("Standard Deviation: 39.6%"));
        assert!(text.contains("Data Points: 5"));
        assert!(text.contains("Images Processed: 7"));
        assert!(text.contains("DATA SOURCE: MODIS/061/MOD10A1"));
        assert!(text.contains("SPATIAL RESOLUTION: 500m"));
        assert!(text.contains("SNOW THRESHOLD: NDSI >= 10"));
    }
}
