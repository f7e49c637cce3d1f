use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Per-image result properties computed server-side by the platform.
///
/// `snow_cover_percent` is null for images where the reduction produced no
/// value (e.g. the region fell entirely in masked pixels); those features
/// are dropped during reshaping. `swe_estimate` and `doy` are only present
/// on point-analysis responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    /// Acquisition date, formatted "YYYY-MM-DD".
    pub date: String,
    /// Percentage of snow-covered pixels in the region, in [0, 100].
    pub snow_cover_percent: Option<f64>,
    pub year: i32,
    pub month: u32,
    /// Rough snow water equivalent estimate in mm (point analysis only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swe_estimate: Option<f64>,
    /// Day of year of the acquisition (point analysis only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doy: Option<i32>,
}

/// One record of a reduced feature collection: the scalar results for a
/// single input image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub properties: FeatureProperties,
}

/// The platform's response to a `collection:reduce` request: one feature
/// per image in the filtered collection, in acquisition order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Decode a response body.
    pub fn from_json(body: &str) -> Result<FeatureCollection, EngineError> {
        serde_json::from_str(body).map_err(|e| EngineError::ResponseParse(e.to_string()))
    }

    /// Number of images the platform processed, before null filtering.
    pub fn images_processed(&self) -> usize {
        self.features.len()
    }
}

#[cfg(test)]
mod tests {
    use super::FeatureCollection;

    const RESPONSE: &str = r#"{
        "features": [
            {"properties": {"date": "2022-01-01", "snow_cover_percent": 84.2, "year": 2022, "month": 1}},
            {"properties": {"date": "2022-01-02", "snow_cover_percent": null, "year": 2022, "month": 1}},
            {"properties": {"date": "2022-01-03", "snow_cover_percent": 79.5, "year": 2022, "month": 1,
                            "swe_estimate": 39.7, "doy": 3}}
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let fc = FeatureCollection::from_json(RESPONSE).unwrap();
        assert_eq!(fc.images_processed(), 3);
        assert_eq!(fc.features[0].properties.snow_cover_percent, Some(84.2));
        assert_eq!(fc.features[1].properties.snow_cover_percent, None);
        assert_eq!(fc.features[2].properties.swe_estimate, Some(39.7));
        assert_eq!(fc.features[2].properties.doy, Some(3));
        assert_eq!(fc.features[0].properties.swe_estimate, None);
    }

    #[test]
    fn test_empty_collection() {
        let fc = FeatureCollection::from_json(r#"{"features": []}"#).unwrap();
        assert_eq!(fc.images_processed(), 0);
        // A body with no features key decodes to an empty collection
        let fc = FeatureCollection::from_json("{}").unwrap();
        assert_eq!(fc.images_processed(), 0);
    }

    #[test]
    fn test_malformed_body() {
        assert!(FeatureCollection::from_json("not json").is_err());
    }
}
