use thiserror::Error;

/// Failure of the network capability itself: the exchange never completed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors returned by the analytics API client
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Connection never completed (DNS, refused connection, timeout in the host stack)
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-2xx status
    #[error("API Error: {status} {status_text}")]
    Transport { status: u16, status_text: String },

    /// Body is not valid JSON or does not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Envelope carried `success: false`
    #[error("API returned unsuccessful response")]
    Protocol,

    /// Request body or query could not be serialized; nothing was sent
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    Network,
    Transport,
    Decode,
    Protocol,
    Encode,
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Network(_) => ApiErrorKind::Network,
            ApiError::Transport { .. } => ApiErrorKind::Transport,
            ApiError::Decode(_) => ApiErrorKind::Decode,
            ApiError::Protocol => ApiErrorKind::Protocol,
            ApiError::Encode(_) => ApiErrorKind::Encode,
        }
    }

    /// Only connection-level failures are worth retrying; the client itself never retries
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// HTTP status of a `Transport` error
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::InvalidRequest(msg) => ApiError::Encode(msg),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
