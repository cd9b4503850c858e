use async_trait::async_trait;
use gloo_net::http::{Method, RequestBuilder};

use super::error::FetchError;
use super::fetch::{Fetch, HttpMethod, HttpRequest, HttpResponse};

/// [`Fetch`] backed by the browser `fetch` API
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooFetch;

#[async_trait(?Send)]
impl Fetch for GlooFetch {
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| FetchError::InvalidRequest(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = if response.ok() {
            response
                .text()
                .await
                .map_err(|e| FetchError::Body(e.to_string()))?
        } else {
            String::new()
        };

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}
