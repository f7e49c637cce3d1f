//! Native HTTP client for the remote geospatial platform.
//!
//! Available behind the `api` feature (reqwest + tokio); the WASM
//! dashboards use [`crate::web`] instead. Watershed listing responses are
//! cached by value with a fixed TTL so repeated interactions do not refetch
//! them; analysis responses are never cached.

use crate::error::EngineError;
use crate::feature::FeatureCollection;
use crate::query::SnowQuery;
use crate::watershed::{parse_boundaries, parse_watershed_listing};
use crate::{watershed_asset, ClientConfig, WATERSHED_NAME_PROPERTY};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// How long cached listing responses stay valid.
pub const LISTING_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Request timeout for platform calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

struct CachedBody {
    fetched_at: Instant,
    body: String,
}

/// Platform client for native (CLI) use.
pub struct EngineClient {
    http: reqwest::Client,
    config: ClientConfig,
    listing_cache: Mutex<HashMap<String, CachedBody>>,
}

impl EngineClient {
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            config,
            listing_cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn post(&self, verb: &str, body: String) -> Result<String, EngineError> {
        let url = self.config.endpoint(verb);
        let mut request = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| EngineError::HttpRequest(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::HttpStatus(status.as_u16()));
        }
        response
            .text()
            .await
            .map_err(|e| EngineError::HttpRequest(e.to_string()))
    }

    /// POST with a value cache keyed on endpoint + body.
    async fn post_cached(&self, verb: &str, body: String) -> Result<String, EngineError> {
        let key = format!("{verb}\n{body}");
        {
            let cache = self.listing_cache.lock().expect("cache lock poisoned");
            if let Some(cached) = cache.get(&key) {
                if cached.fetched_at.elapsed() < LISTING_CACHE_TTL {
                    log::debug!("cache hit for {verb}");
                    return Ok(cached.body.clone());
                }
            }
        }
        let fresh = self.post(verb, body).await?;
        let mut cache = self.listing_cache.lock().expect("cache lock poisoned");
        cache.insert(
            key,
            CachedBody {
                fetched_at: Instant::now(),
                body: fresh.clone(),
            },
        );
        Ok(fresh)
    }

    /// List watershed names from the boundary asset, sorted. Cached.
    pub async fn list_watersheds(&self) -> Result<Vec<String>, EngineError> {
        let body = serde_json::json!({
            "asset": watershed_asset(&self.config.project),
            "property": WATERSHED_NAME_PROPERTY,
        })
        .to_string();
        let response = self.post_cached("table:aggregate", body).await?;
        parse_watershed_listing(&response)
    }

    /// Fetch the GeoJSON watershed boundary collection. Cached.
    pub async fn watershed_boundaries(&self) -> Result<serde_json::Value, EngineError> {
        let body = serde_json::json!({
            "asset": watershed_asset(&self.config.project),
        })
        .to_string();
        let response = self.post_cached("table:features", body).await?;
        parse_boundaries(&response)
    }

    /// Run a filter + reduce query and return the per-image feature
    /// collection. Not cached.
    pub async fn reduce_collection(
        &self,
        query: &SnowQuery,
    ) -> Result<FeatureCollection, EngineError> {
        log::info!(
            "reducing {} over {} from {} to {}",
            query.collection,
            query.region.label(),
            query.start_date,
            query.end_date
        );
        let response = self
            .post("collection:reduce", query.to_request_body())
            .await?;
        FeatureCollection::from_json(&response)
    }
}
