//! Browser fetch client for the remote geospatial platform.
//!
//! Available behind the `web` feature. Mirrors [`crate::client`] for the
//! WASM dashboards, using the browser's fetch API via `web-sys`. The
//! dashboards fetch the watershed listing once on mount and keep it in app
//! state, so no response cache is kept here.

use crate::error::EngineError;
use crate::feature::FeatureCollection;
use crate::query::SnowQuery;
use crate::watershed::{parse_boundaries, parse_watershed_listing};
use crate::{watershed_asset, ClientConfig, WATERSHED_NAME_PROPERTY};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn js_error(context: &str, value: JsValue) -> EngineError {
    let detail = value
        .as_string()
        .or_else(|| js_sys::JSON::stringify(&value).ok().map(String::from))
        .unwrap_or_else(|| "unknown error".to_string());
    EngineError::HttpRequest(format!("{context}: {detail}"))
}

async fn post(url: &str, body: &str, token: Option<&str>) -> Result<String, EngineError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| js_error("building request", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| js_error("setting headers", e))?;
    if let Some(token) = token {
        request
            .headers()
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|e| js_error("setting headers", e))?;
    }

    let window = web_sys::window()
        .ok_or_else(|| EngineError::HttpRequest("no window object".to_string()))?;
    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("fetch", e))?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|e| js_error("response cast", e))?;

    if !response.ok() {
        return Err(EngineError::HttpStatus(response.status()));
    }

    let text_promise = response.text().map_err(|e| js_error("reading body", e))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|e| js_error("reading body", e))?;
    text_value
        .as_string()
        .ok_or_else(|| EngineError::ResponseParse("body is not a string".to_string()))
}

/// Platform client for the WASM dashboards.
#[derive(Clone)]
pub struct WebEngineClient {
    config: ClientConfig,
}

impl WebEngineClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn post_verb(&self, verb: &str, body: String) -> Result<String, EngineError> {
        let url = self.config.endpoint(verb);
        post(&url, &body, self.config.token.as_deref()).await
    }

    /// List watershed names from the boundary asset, sorted.
    pub async fn list_watersheds(&self) -> Result<Vec<String>, EngineError> {
        let body = serde_json::json!({
            "asset": watershed_asset(&self.config.project),
            "property": WATERSHED_NAME_PROPERTY,
        })
        .to_string();
        let response = self.post_verb("table:aggregate", body).await?;
        parse_watershed_listing(&response)
    }

    /// Fetch the GeoJSON watershed boundary collection.
    pub async fn watershed_boundaries(&self) -> Result<serde_json::Value, EngineError> {
        let body = serde_json::json!({
            "asset": watershed_asset(&self.config.project),
        })
        .to_string();
        let response = self.post_verb("table:features", body).await?;
        parse_boundaries(&response)
    }

    /// Run a filter + reduce query and return the per-image feature
    /// collection.
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
            .post_verb("collection:reduce", query.to_request_body())
            .await?;
        FeatureCollection::from_json(&response)
    }
}
