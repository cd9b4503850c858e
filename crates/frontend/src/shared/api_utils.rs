//! API utilities for frontend-backend communication
//!
//! Provides the analytics service origin and helpers for building API URLs.

/// Origin of the analytics service when nothing else is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Process-wide client configuration
///
/// The origin is fixed at construction time; there is no runtime discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Trailing slashes are dropped so paths can always start with "/api/"
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        api_url(&self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `base` - Service origin without trailing slash
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```
/// use movie_insights_frontend::shared::api_utils::api_url;
///
/// let url = api_url("http://localhost:8000", "/api/overview");
/// assert_eq!(url, "http://localhost:8000/api/overview");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}
