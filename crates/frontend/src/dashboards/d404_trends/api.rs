use contracts::dashboards::d404_trends::TrendsData;

use crate::shared::http::{ApiClient, ApiError, Fetch};

impl<F: Fetch> ApiClient<F> {
    /// Yearly trends and monthly release patterns
    pub async fn get_trends(&self) -> Result<TrendsData, ApiError> {
        self.get("/api/trends").await
    }
}

#[cfg(test)]
mod tests {
    use crate::shared::http::testing::{mock_client, MockFetch};
    use crate::shared::http::ApiErrorKind;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_trends() {
        let client = mock_client(MockFetch::new().envelope(json!({
            "yearly": [{"year": 2015, "movie_count": 216, "avg_rating": 6.0, "avg_popularity": 34.5,
                "avg_runtime": 106.0, "avg_budget": 4.6e7, "total_budget": 6.3e9,
                "avg_revenue": 1.6e8, "total_revenue": 2.2e10, "avg_roi": 380.1}],
            "monthly": []
        })));
        let trends = client.get_trends().await.unwrap();

        assert_eq!(trends.yearly.len(), 1);
        assert_eq!(trends.yearly[0].movie_count, 216);
        assert!(trends.monthly.is_empty());
        assert_eq!(client.fetcher().only_path(), "/api/trends");
    }

    #[tokio::test]
    async fn test_get_trends_missing_data() {
        let client = mock_client(MockFetch::new().json(200, json!({"success": true})));
        let err = client.get_trends().await.unwrap_err();
        assert_eq!(err.kind(), ApiErrorKind::Decode);
    }
}
