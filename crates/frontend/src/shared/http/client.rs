use contracts::shared::api_response::RawApiResponse;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use super::fetch::{Fetch, HttpRequest, RequestOptions};
use crate::shared::api_utils::ApiConfig;

#[cfg(not(target_arch = "wasm32"))]
pub type DefaultFetch = super::reqwest_fetch::ReqwestFetch;
#[cfg(target_arch = "wasm32")]
pub type DefaultFetch = super::gloo_fetch::GlooFetch;

const CONTENT_TYPE: &str = "Content-Type";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Client of the movie analytics service
///
/// Holds no state besides its configuration, so clones are cheap and calls
/// are independent: no caching, no retries, no deduplication.
#[derive(Debug, Clone)]
pub struct ApiClient<F = DefaultFetch> {
    config: ApiConfig,
    fetch: F,
}

impl ApiClient<DefaultFetch> {
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    pub fn with_config(config: ApiConfig) -> Self {
        Self::with_fetch(config, DefaultFetch::default())
    }
}

impl Default for ApiClient<DefaultFetch> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Fetch> ApiClient<F> {
    pub fn with_fetch(config: ApiConfig, fetch: F) -> Self {
        Self { config, fetch }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetch
    }

    /// Call an endpoint and unwrap the `{ success, data }` envelope
    ///
    /// Outcomes, in the order they are checked:
    /// - exchange did not complete: [`ApiError::Network`]
    /// - non-2xx status: [`ApiError::Transport`], the body is not parsed
    /// - body is not an envelope: [`ApiError::Decode`]
    /// - `success == false`: [`ApiError::Protocol`], whatever `data` holds
    /// - `data` does not fit `T`: [`ApiError::Decode`]
    ///
    /// The payload is trusted beyond its structural fit to `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let request = self.build_request(path, options);
        log::debug!("API: {} {}", request.method, request.url);

        let url = request.url.clone();
        let response = self.fetch.fetch(request).await.map_err(|e| {
            log::warn!("API: request to {} failed: {}", url, e);
            ApiError::from(e)
        })?;

        log::debug!("API response: {} for {}", response.status, url);

        if !response.is_success() {
            log::warn!(
                "API: {} {} for {}",
                response.status,
                response.status_text,
                url
            );
            return Err(ApiError::Transport {
                status: response.status,
                status_text: response.status_text,
            });
        }

        let envelope: RawApiResponse = serde_json::from_str(&response.body)?;
        if !envelope.success {
            log::warn!("API: unsuccessful response from {}", url);
            return Err(ApiError::Protocol);
        }

        Ok(serde_json::from_value(envelope.data)?)
    }

    /// `GET` shortcut used by the read accessors
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(path, RequestOptions::get()).await
    }

    fn build_request(&self, path: &str, options: RequestOptions) -> HttpRequest {
        let mut headers = vec![(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string())];
        for (name, value) in options.headers {
            if name.eq_ignore_ascii_case(CONTENT_TYPE) {
                log::warn!(
                    "API: Content-Type overridden with '{}' for {}",
                    value,
                    path
                );
                headers[0].1 = value;
            } else {
                headers.push((name, value));
            }
        }

        HttpRequest {
            method: options.method,
            url: self.config.url(path),
            headers,
            body: options.body,
        }
    }
}

/// Append a URL-encoded query string built from `query` to `path`
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let query = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, query))
    }
}
