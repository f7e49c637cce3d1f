//! JSON analysis report.

use chrono::NaiveDateTime;
use sca_data::statistics::{AdvancedStatistics, AnalysisSummary};
use sca_ee::geometry::Region;
use sca_ee::SNOW_COLLECTION;
use serde_json::{json, Value};

/// Build the nested JSON report.
///
/// Every value in the `statistics` block is serialized as a float,
/// including the two counters, so downstream consumers see one uniform
/// numeric type. `advanced_statistics` is null unless the advanced panel
/// was computed. `analysis_date` is an ISO-8601 timestamp.
pub fn build_report(
    region: &Region,
    start_date: &str,
    end_date: &str,
    summary: &AnalysisSummary,
    advanced: Option<&AdvancedStatistics>,
    generated_at: NaiveDateTime,
) -> Value {
    let advanced_value = match advanced {
        Some(stats) => serde_json::to_value(stats).unwrap_or(Value::Null),
        None => Value::Null,
    };
    json!({
        "region": region.label(),
        "analysis_mode": region.analysis_mode(),
        "period": format!("{start_date} to {end_date}"),
        "statistics": {
            "mean": summary.mean,
            "max": summary.max,
            "min": summary.min,
            "std": summary.std,
            "count": summary.count as f64,
            "images_processed": summary.images_processed as f64,
        },
        "advanced_statistics": advanced_value,
        "analysis_date": generated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        "data_source": SNOW_COLLECTION,
    })
}

/// Pretty-printed report text for download.
pub fn report_to_string(report: &Value) -> String {
    serde_json::to_string_pretty(report).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{build_report, report_to_string};
    use chrono::{NaiveDate, NaiveDateTime};
    use sca_data::statistics::{AdvancedStatistics, AnalysisSummary};
    use sca_ee::geometry::Region;
    use sca_ee::record::SnowRecord;

    fn summary() -> AnalysisSummary {
        AnalysisSummary {
            mean: 48.0,
            max: 90.0,
            min: 0.0,
            std: 39.6,
            count: 5,
            images_processed: 7,
        }
    }

    fn generated() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_statistics_keys_are_floats() {
        let region = Region::watershed("Elbow");
        let report = build_report(&region, "2022-01-01", "2023-12-31", &summary(), None, generated());
        let stats = &report["statistics"];
        for key in ["mean", "max", "min", "std", "count", "images_processed"] {
            assert!(
                stats[key].is_f64(),
                "statistics key {key} must serialize as a float"
            );
        }
        assert_eq!(stats["count"].as_f64(), Some(5.0));
    }

    #[test]
    fn test_report_shape() {
        let region = Region::buffered_point(51.1784, -115.5708, 1000).unwrap();
        let report = build_report(&region, "2022-01-01", "2023-12-31", &summary(), None, generated());
        assert_eq!(report["analysis_mode"], "point");
        assert_eq!(report["period"], "2022-01-01 to 2023-12-31");
        assert_eq!(report["analysis_date"], "2024-03-01T12:30:00");
        assert_eq!(report["data_source"], "MODIS/061/MOD10A1");
        assert!(report["advanced_statistics"].is_null());
    }

    #[test]
    fn test_advanced_block_included() {
        let records = vec![
            SnowRecord {
                date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
                snow_cover_percent: 80.0,
                year: 2022,
                month: 1,
                swe_estimate: None,
                doy: None,
            },
            SnowRecord {
                date: NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(),
                snow_cover_percent: 20.0,
                year: 2022,
                month: 7,
                swe_estimate: None,
                doy: None,
            },
        ];
        let advanced = AdvancedStatistics::from_records(&records).unwrap();
        let region = Region::watershed("Elbow");
        let report = build_report(
            &region,
            "2022-01-01",
            "2022-12-31",
            &summary(),
            Some(&advanced),
            generated(),
        );
        assert!(report["advanced_statistics"]["basic"]["median"].is_number());
        assert_eq!(
            report["advanced_statistics"]["persistence"]["high_snow_days"],
            1
        );

        let text = report_to_string(&report);
        assert!(text.contains("\"advanced_statistics\""));
    }
}
