use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Response of a `table:aggregate` call: the distinct values of one
/// property across a feature collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(default)]
    pub values: Vec<String>,
}

/// Parse a watershed listing response into a sorted, deduplicated list of
/// watershed names for the selection dropdown.
pub fn parse_watershed_listing(body: &str) -> Result<Vec<String>, EngineError> {
    let listing: PropertyListing =
        serde_json::from_str(body).map_err(|e| EngineError::ResponseParse(e.to_string()))?;
    let mut names = listing.values;
    names.sort();
    names.dedup();
    Ok(names)
}

/// Parse a `table:features` response into the GeoJSON boundary collection
/// used by the map dashboard. The geometry payload is kept as raw JSON and
/// handed to the map renderer untouched; only the top-level shape is
/// validated here.
pub fn parse_boundaries(body: &str) -> Result<serde_json::Value, EngineError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| EngineError::ResponseParse(e.to_string()))?;
    if !value
        .get("features")
        .map(serde_json::Value::is_array)
        .unwrap_or(false)
    {
        return Err(EngineError::ResponseParse(
            "boundary response missing features array".to_string(),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{parse_boundaries, parse_watershed_listing};

    #[test]
    fn test_listing_is_sorted_and_deduped() {
        let body = r#"{"values": ["Elbow", "Bow at Banff", "Elbow", "Kananaskis"]}"#;
        let names = parse_watershed_listing(body).unwrap();
        assert_eq!(names, vec!["Bow at Banff", "Elbow", "Kananaskis"]);
    }

    #[test]
    fn test_empty_listing() {
        let names = parse_watershed_listing(r#"{"values": []}"#).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_boundaries_shape_check() {
        let ok = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"layer": "Elbow"},
             "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}}
        ]}"#;
        let value = parse_boundaries(ok).unwrap();
        assert_eq!(value["features"][0]["properties"]["layer"], "Elbow");

        assert!(parse_boundaries(r#"{"type": "FeatureCollection"}"#).is_err());
        assert!(parse_boundaries("nope").is_err());
    }
}
