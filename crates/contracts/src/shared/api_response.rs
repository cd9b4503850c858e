use serde::{Deserialize, Serialize};

/// Envelope wrapped around every analytics response
///
/// `success == false` is the only failure signal the service gives; the
/// `data` of such an envelope must not be used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }

    /// Unwrap the payload, `None` when the service flagged the response as failed
    pub fn into_data(self) -> Option<T> {
        if self.success {
            Some(self.data)
        } else {
            None
        }
    }
}

/// Envelope with the payload kept as raw JSON
///
/// Lets the caller read the `success` flag before committing to a payload
/// type. A missing `data` field decodes as `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawApiResponse {
    pub success: bool,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_data() {
        assert_eq!(ApiResponse::ok(5).into_data(), Some(5));
        let failed = ApiResponse {
            success: false,
            data: 5,
        };
        assert_eq!(failed.into_data(), None);
    }

    #[test]
    fn test_raw_envelope_without_data() {
        let raw: RawApiResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!raw.success);
        assert!(raw.data.is_null());
    }

    #[test]
    fn test_ok_serializes_flag_and_payload() {
        let json = serde_json::to_value(ApiResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": [1, 2]}));
    }
}
