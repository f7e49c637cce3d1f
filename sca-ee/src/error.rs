use std::fmt;

/// Errors that can occur when building queries or talking to the
/// remote geospatial platform.
///
/// Remote failures are surfaced to the user as a single message string;
/// there is no retry and no transient/permanent distinction. The two
/// empty-result conditions get their own variants so the UI can show a
/// "no data" message instead of an error.
#[derive(Debug, PartialEq, Clone)]
pub enum EngineError {
    /// The HTTP request itself failed (network, TLS, timeout, auth transport).
    HttpRequest(String),
    /// The platform answered with a non-success status code.
    HttpStatus(u16),
    /// The response body could not be decoded into the expected shape.
    ResponseParse(String),
    /// A query was built with start date on or after the end date.
    InvalidDateRange,
    /// A point query was built with out-of-range coordinates.
    InvalidCoordinates { lat: f64, lon: f64 },
    /// The filtered image collection contained zero images.
    NoImages,
    /// Every returned feature carried a null metric value.
    NoValidData,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::HttpRequest(msg) => write!(f, "request failed: {msg}"),
            EngineError::HttpStatus(code) => write!(f, "platform returned status {code}"),
            EngineError::ResponseParse(msg) => write!(f, "could not parse response: {msg}"),
            EngineError::InvalidDateRange => {
                write!(f, "start date must be before end date")
            }
            EngineError::InvalidCoordinates { lat, lon } => {
                write!(f, "coordinates out of range: {lat}, {lon}")
            }
            EngineError::NoImages => {
                write!(f, "No MODIS data found for the selected period and region")
            }
            EngineError::NoValidData => write!(f, "No valid snow cover data found"),
        }
    }
}

impl std::error::Error for EngineError {}

impl EngineError {
    /// True for the two empty-result conditions that the UI presents as
    /// "no data" rather than as a failure.
    pub fn is_no_data(&self) -> bool {
        matches!(self, EngineError::NoImages | EngineError::NoValidData)
    }
}

#[cfg(test)]
mod tests {
    use super::EngineError;

    #[test]
    fn test_no_data_classification() {
        assert!(EngineError::NoImages.is_no_data());
        assert!(EngineError::NoValidData.is_no_data());
        assert!(!EngineError::HttpStatus(500).is_no_data());
        assert!(!EngineError::InvalidDateRange.is_no_data());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            EngineError::NoImages.to_string(),
            "No MODIS data found for the selected period and region"
        );
        assert_eq!(
            EngineError::NoValidData.to_string(),
            "No valid snow cover data found"
        );
    }
}
