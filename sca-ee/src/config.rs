/// Connection settings for the remote geospatial platform.
///
/// The defaults point at the public endpoint and the project hosting the
/// watershed boundary asset. A bearer token is optional at construction
/// time; requests without one will fail with whatever status the platform
/// returns, surfaced verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the platform REST endpoint, without trailing slash.
    pub base_url: String,
    /// Cloud project used for asset paths and request routing.
    pub project: String,
    /// Optional bearer token sent as `Authorization: Bearer <token>`.
    pub token: Option<String>,
}

/// Default platform endpoint.
pub const DEFAULT_BASE_URL: &str = "https://earthengine.googleapis.com";

/// Default project hosting the watershed assets.
pub const DEFAULT_PROJECT: &str = "ee-koppengeiger";

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            project: DEFAULT_PROJECT.to_string(),
            token: None,
        }
    }
}

impl ClientConfig {
    /// Full URL for an RPC-style endpoint under this project.
    pub fn endpoint(&self, verb: &str) -> String {
        format!(
            "{}/v1/projects/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.project,
            verb
        )
    }
}

#[cfg(test)]
mod tests {
    use super::ClientConfig;

    #[test]
    fn test_endpoint_url() {
        let config = ClientConfig {
            base_url: "https://example.test/".to_string(),
            project: "demo".to_string(),
            token: None,
        };
        assert_eq!(
            config.endpoint("collection:reduce"),
            "https://example.test/v1/projects/demo/collection:reduce"
        );
    }
}
