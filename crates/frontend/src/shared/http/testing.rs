//! Scripted `Fetch` for unit tests

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

use super::client::ApiClient;
use super::error::FetchError;
use super::fetch::{Fetch, HttpRequest, HttpResponse};
use crate::shared::api_utils::ApiConfig;

/// Replays queued outcomes in order and records every request it receives
#[derive(Debug, Default)]
pub(crate) struct MockFetch {
    outcomes: Mutex<VecDeque<Result<HttpResponse, FetchError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockFetch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn raw(self, status: u16, body: &str) -> Self {
        self.status(status, "OK", body)
    }

    pub(crate) fn status(self, status: u16, status_text: &str, body: &str) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }));
        self
    }

    pub(crate) fn json(self, status: u16, body: Value) -> Self {
        self.raw(status, &body.to_string())
    }

    /// `{"success": true, "data": data}` with status 200
    pub(crate) fn envelope(self, data: Value) -> Self {
        self.json(200, json!({"success": true, "data": data}))
    }

    pub(crate) fn fail(self, err: FetchError) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(err));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Path and query of the single recorded request, without the origin
    pub(crate) fn only_path(&self) -> String {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0]
            .url
            .strip_prefix(crate::shared::api_utils::DEFAULT_API_BASE)
            .expect("request not sent to the default origin")
            .to_string()
    }
}

#[async_trait]
impl Fetch for MockFetch {
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Connection("no scripted response".to_string())))
    }
}

pub(crate) fn mock_client(fetch: MockFetch) -> ApiClient<MockFetch> {
    ApiClient::with_fetch(ApiConfig::default(), fetch)
}
