use crate::error::EngineError;
use crate::feature::FeatureCollection;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire date format used in feature properties and exports.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of the analysis table: the reduced snow metrics for a single
/// satellite image. Rows are immutable once reshaped and live only for the
/// duration of one interaction (plus any user-triggered export).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnowRecord {
    pub date: NaiveDate,
    pub snow_cover_percent: f64,
    pub year: i32,
    pub month: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swe_estimate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doy: Option<i32>,
}

impl SnowRecord {
    /// Reshape a reduced feature collection into table rows.
    ///
    /// One row per feature with a non-null metric; null-metric features are
    /// dropped; the platform's (date) ordering is preserved. Returns
    /// `NoImages` for an empty collection and `NoValidData` when every
    /// feature was null.
    pub fn from_feature_collection(
        collection: &FeatureCollection,
    ) -> Result<Vec<SnowRecord>, EngineError> {
        if collection.features.is_empty() {
            return Err(EngineError::NoImages);
        }

        let mut records = Vec::with_capacity(collection.features.len());
        let mut dropped = 0usize;
        for feature in &collection.features {
            let props = &feature.properties;
            let Some(percent) = props.snow_cover_percent else {
                dropped += 1;
                continue;
            };
            let date = NaiveDate::parse_from_str(&props.date, DATE_FORMAT)
                .map_err(|e| EngineError::ResponseParse(format!("bad date {:?}: {e}", props.date)))?;
            records.push(SnowRecord {
                date,
                snow_cover_percent: percent,
                year: props.year,
                month: props.month,
                swe_estimate: props.swe_estimate,
                doy: props.doy,
            });
        }

        if dropped > 0 {
            log::info!("dropped {dropped} null-metric features during reshape");
        }
        if records.is_empty() {
            return Err(EngineError::NoValidData);
        }
        Ok(records)
    }

    /// True if any record in the slice carries SWE columns.
    pub fn has_swe(records: &[SnowRecord]) -> bool {
        records.iter().any(|r| r.swe_estimate.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::SnowRecord;
    use crate::error::EngineError;
    use crate::feature::FeatureCollection;
    use chrono::NaiveDate;

    const RESPONSE: &str = r#"{
        "features": [
            {"properties": {"date": "2022-01-01", "snow_cover_percent": 84.2, "year": 2022, "month": 1}},
            {"properties": {"date": "2022-01-02", "snow_cover_percent": null, "year": 2022, "month": 1}},
            {"properties": {"date": "2022-01-03", "snow_cover_percent": 79.5, "year": 2022, "month": 1}},
            {"properties": {"date": "2022-02-01", "snow_cover_percent": 91.0, "year": 2022, "month": 2}}
        ]
    }"#;

    #[test]
    fn test_reshape_drops_nulls_and_preserves_order() {
        let fc = FeatureCollection::from_json(RESPONSE).unwrap();
        let records = SnowRecord::from_feature_collection(&fc).unwrap();
        assert_eq!(records.len(), 3);
        let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2022, 1, 3).unwrap(),
                NaiveDate::from_ymd_opt(2022, 2, 1).unwrap(),
            ]
        );
        assert_eq!(records[1].snow_cover_percent, 79.5);
        assert!(!SnowRecord::has_swe(&records));
    }

    #[test]
    fn test_empty_collection_is_no_images() {
        let fc = FeatureCollection::from_json(r#"{"features": []}"#).unwrap();
        assert_eq!(
            SnowRecord::from_feature_collection(&fc),
            Err(EngineError::NoImages)
        );
    }

    #[test]
    fn test_all_null_is_no_valid_data() {
        let fc = FeatureCollection::from_json(
            r#"{"features": [
                {"properties": {"date": "2022-01-01", "snow_cover_percent": null, "year": 2022, "month": 1}},
                {"properties": {"date": "2022-01-02", "snow_cover_percent": null, "year": 2022, "month": 1}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            SnowRecord::from_feature_collection(&fc),
            Err(EngineError::NoValidData)
        );
    }

    #[test]
    fn test_bad_date_is_parse_error() {
        let fc = FeatureCollection::from_json(
            r#"{"features": [
                {"properties": {"date": "01/02/2022", "snow_cover_percent": 5.0, "year": 2022, "month": 1}}
            ]}"#,
        )
        .unwrap();
        assert!(matches!(
            SnowRecord::from_feature_collection(&fc),
            Err(EngineError::ResponseParse(_))
        ));
    }

    #[test]
    fn test_swe_columns_detected() {
        let fc = FeatureCollection::from_json(
            r#"{"features": [
                {"properties": {"date": "2022-01-01", "snow_cover_percent": 50.0, "year": 2022,
                                "month": 1, "swe_estimate": 25.0, "doy": 1}}
            ]}"#,
        )
        .unwrap();
        let records = SnowRecord::from_feature_collection(&fc).unwrap();
        assert!(SnowRecord::has_swe(&records));
        assert_eq!(records[0].swe_estimate, Some(25.0));
        assert_eq!(records[0].doy, Some(1));
    }
}
