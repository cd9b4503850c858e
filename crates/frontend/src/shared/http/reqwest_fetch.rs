use async_trait::async_trait;

use super::error::FetchError;
use super::fetch::{Fetch, HttpMethod, HttpRequest, HttpResponse};

/// [`Fetch`] backed by reqwest, used on native targets
///
/// The underlying client has no timeout: a hung call waits until the OS
/// network stack gives up.
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetch {
    client: reqwest::Client,
}

impl ReqwestFetch {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetch for ReqwestFetch {
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(classify)?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = if status.is_success() {
            response
                .text()
                .await
                .map_err(|e| FetchError::Body(e.to_string()))?
        } else {
            String::new()
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(err.to_string())
    } else if err.is_builder() {
        FetchError::InvalidRequest(err.to_string())
    } else {
        FetchError::Connection(err.to_string())
    }
}
