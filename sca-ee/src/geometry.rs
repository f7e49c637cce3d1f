use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Spatial extent of a snow cover query.
///
/// The platform resolves `Watershed` regions against the boundary asset by
/// name; `BufferedPoint` regions are a circle of `buffer_m` meters around
/// the coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Region {
    Watershed { name: String },
    BufferedPoint { lat: f64, lon: f64, buffer_m: u32 },
}

impl Region {
    /// Region covering a named watershed from the boundary asset.
    pub fn watershed(name: impl Into<String>) -> Region {
        Region::Watershed { name: name.into() }
    }

    /// Region covering a circular buffer around a point.
    ///
    /// Latitude must be within [-90, 90] and longitude within [-180, 180].
    pub fn buffered_point(lat: f64, lon: f64, buffer_m: u32) -> Result<Region, EngineError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(EngineError::InvalidCoordinates { lat, lon });
        }
        Ok(Region::BufferedPoint { lat, lon, buffer_m })
    }

    /// Short label used in report filenames and chart titles.
    pub fn label(&self) -> String {
        match self {
            Region::Watershed { name } => name.clone(),
            Region::BufferedPoint { lat, lon, .. } => format!("{lat:.4}_{lon:.4}"),
        }
    }

    /// Report value for the `analysis_mode` field.
    pub fn analysis_mode(&self) -> &'static str {
        match self {
            Region::Watershed { .. } => "watershed",
            Region::BufferedPoint { .. } => "point",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Region;
    use crate::error::EngineError;

    #[test]
    fn test_buffered_point_validation() {
        assert!(Region::buffered_point(51.1784, -115.5708, 1000).is_ok());
        assert_eq!(
            Region::buffered_point(91.0, 0.0, 1000),
            Err(EngineError::InvalidCoordinates { lat: 91.0, lon: 0.0 })
        );
        assert!(Region::buffered_point(0.0, -180.5, 1000).is_err());
    }

    #[test]
    fn test_labels() {
        let ws = Region::watershed("Bow at Banff");
        assert_eq!(ws.label(), "Bow at Banff");
        assert_eq!(ws.analysis_mode(), "watershed");

        let pt = Region::buffered_point(51.1784, -115.5708, 1000).unwrap();
        assert_eq!(pt.label(), "51.1784_-115.5708");
        assert_eq!(pt.analysis_mode(), "point");
    }

    #[test]
    fn test_region_serialization() {
        let ws = Region::watershed("Elbow");
        let json = serde_json::to_string(&ws).unwrap();
        assert_eq!(json, r#"{"type":"watershed","name":"Elbow"}"#);

        let pt = Region::buffered_point(51.0, -115.0, 1500).unwrap();
        let json = serde_json::to_value(&pt).unwrap();
        assert_eq!(json["type"], "buffered_point");
        assert_eq!(json["buffer_m"], 1500);
    }
}
