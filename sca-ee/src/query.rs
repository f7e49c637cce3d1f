use crate::error::EngineError;
use crate::geometry::Region;
use crate::{
    MAX_PIXELS_POINT, MAX_PIXELS_WATERSHED, PIXEL_SCALE_M, SNOW_BAND, SNOW_COLLECTION,
    SNOW_THRESHOLD,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-image reduction applied server-side over the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reducer {
    Mean,
    Sum,
}

/// A server-side filter + reduce request over the snow image collection.
///
/// Serialized verbatim as the body of a `collection:reduce` call. The
/// platform filters the collection to the date range and region, masks each
/// image at the snow threshold, reduces over the region at `scale_m`, and
/// returns one feature per image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnowQuery {
    pub collection: String,
    pub band: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub region: Region,
    pub reducer: Reducer,
    pub scale_m: u32,
    pub max_pixels: u64,
    pub snow_threshold: f64,
    /// When set, the platform also returns `swe_estimate` and `doy`
    /// properties on each feature.
    pub include_swe: bool,
}

impl SnowQuery {
    /// Query for a named watershed over a date range.
    pub fn watershed(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<SnowQuery, EngineError> {
        if start_date >= end_date {
            return Err(EngineError::InvalidDateRange);
        }
        Ok(SnowQuery {
            collection: SNOW_COLLECTION.to_string(),
            band: SNOW_BAND.to_string(),
            start_date,
            end_date,
            region: Region::watershed(name),
            reducer: Reducer::Mean,
            scale_m: PIXEL_SCALE_M,
            max_pixels: MAX_PIXELS_WATERSHED,
            snow_threshold: SNOW_THRESHOLD,
            include_swe: false,
        })
    }

    /// Query for a buffered point over a date range. Point analyses use the
    /// smaller pixel cap and request the SWE estimate columns.
    pub fn point(
        lat: f64,
        lon: f64,
        buffer_m: u32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<SnowQuery, EngineError> {
        if start_date >= end_date {
            return Err(EngineError::InvalidDateRange);
        }
        let region = Region::buffered_point(lat, lon, buffer_m)?;
        Ok(SnowQuery {
            collection: SNOW_COLLECTION.to_string(),
            band: SNOW_BAND.to_string(),
            start_date,
            end_date,
            region,
            reducer: Reducer::Mean,
            scale_m: PIXEL_SCALE_M,
            max_pixels: MAX_PIXELS_POINT,
            snow_threshold: SNOW_THRESHOLD,
            include_swe: true,
        })
    }

    /// Serialize as a request body.
    pub fn to_request_body(&self) -> String {
        serde_json::to_string(self).expect("query serialization cannot fail")
    }
}

#[cfg(test)]
mod tests {
    use super::{Reducer, SnowQuery};
    use crate::error::EngineError;
    use crate::geometry::Region;
    use chrono::NaiveDate;

    fn dates() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
        )
    }

    #[test]
    fn test_watershed_query_defaults() {
        let (start, end) = dates();
        let q = SnowQuery::watershed("Bow at Banff", start, end).unwrap();
        assert_eq!(q.collection, "MODIS/061/MOD10A1");
        assert_eq!(q.band, "NDSI_Snow_Cover");
        assert_eq!(q.reducer, Reducer::Mean);
        assert_eq!(q.scale_m, 500);
        assert_eq!(q.max_pixels, 1_000_000_000);
        assert_eq!(q.snow_threshold, 10.0);
        assert!(!q.include_swe);
        assert_eq!(q.region, Region::watershed("Bow at Banff"));
    }

    #[test]
    fn test_point_query_defaults() {
        let (start, end) = dates();
        let q = SnowQuery::point(51.1784, -115.5708, 1000, start, end).unwrap();
        assert_eq!(q.max_pixels, 1_000_000);
        assert!(q.include_swe);
    }

    #[test]
    fn test_date_range_validation() {
        let (start, end) = dates();
        assert_eq!(
            SnowQuery::watershed("X", end, start),
            Err(EngineError::InvalidDateRange)
        );
        // equal dates are rejected too
        assert_eq!(
            SnowQuery::watershed("X", start, start),
            Err(EngineError::InvalidDateRange)
        );
    }

    #[test]
    fn test_request_body_shape() {
        let (start, end) = dates();
        let q = SnowQuery::watershed("Elbow", start, end).unwrap();
        let body: serde_json::Value = serde_json::from_str(&q.to_request_body()).unwrap();
        assert_eq!(body["start_date"], "2022-01-01");
        assert_eq!(body["end_date"], "2023-12-31");
        assert_eq!(body["reducer"], "mean");
        assert_eq!(body["region"]["type"], "watershed");
        assert_eq!(body["region"]["name"], "Elbow");
    }

    #[test]
    fn test_body_round_trips() {
        let (start, end) = dates();
        let q = SnowQuery::point(51.0, -115.0, 2000, start, end).unwrap();
        let parsed: SnowQuery = serde_json::from_str(&q.to_request_body()).unwrap();
        assert_eq!(parsed, q);
    }
}
