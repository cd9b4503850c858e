use contracts::dashboards::d401_overview::OverviewStats;

use crate::shared::http::{ApiClient, ApiError, Fetch};

const OVERVIEW_PATH: &str = "/api/overview";

impl<F: Fetch> ApiClient<F> {
    /// Dataset overview: movie counts, year span, budget/revenue/rating statistics
    pub async fn get_overview(&self) -> Result<OverviewStats, ApiError> {
        self.get(OVERVIEW_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use crate::shared::http::testing::{mock_client, MockFetch};
    use crate::shared::http::{ApiError, HttpMethod};
    use serde_json::json;

    fn overview_json() -> serde_json::Value {
        json!({
            "total_movies": 4803,
            "movies_with_financial_data": 3229,
            "year_range": {"min": 1916, "max": 2017},
            "budget": {"mean": 40654444.8, "median": 25000000.0, "min": 1.0, "max": 380000000.0},
            "revenue": {"mean": 121242957.3, "median": 55184721.0, "min": 5.0, "max": 2787965087.0},
            "vote_average": {"mean": 6.09, "median": 6.2}
        })
    }

    #[tokio::test]
    async fn test_get_overview() {
        let client = mock_client(MockFetch::new().envelope(overview_json()));
        let stats = client.get_overview().await.unwrap();

        assert_eq!(stats.total_movies, 4803);
        assert_eq!(stats.year_range.max, Some(2017));
        assert_eq!(stats.vote_average.median, 6.2);
        assert_eq!(serde_json::to_value(&stats).unwrap(), overview_json());

        assert_eq!(client.fetcher().only_path(), "/api/overview");
        assert_eq!(client.fetcher().requests()[0].method, HttpMethod::Get);
    }

    #[tokio::test]
    async fn test_get_overview_unsuccessful() {
        let client = mock_client(
            MockFetch::new().json(200, json!({"success": false, "data": overview_json()})),
        );
        assert_eq!(client.get_overview().await.unwrap_err(), ApiError::Protocol);
    }
}
