use serde::{Deserialize, Serialize};

/// Response of `GET /api/trends`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendsData {
    pub yearly: Vec<YearlyTrend>,
    pub monthly: Vec<MonthlyPattern>,
}

/// Per-year aggregate; financial columns are zero for years without financial data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyTrend {
    pub year: i32,
    pub movie_count: u64,
    pub avg_rating: f64,
    pub avg_popularity: f64,
    pub avg_runtime: f64,
    pub avg_budget: f64,
    pub total_budget: f64,
    pub avg_revenue: f64,
    pub total_revenue: f64,
    pub avg_roi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPattern {
    /// 1..=12, sent as a float by the service
    pub month: f64,
    /// "Jan" .. "Dec"
    pub month_name: String,
    pub movie_count: u64,
    pub avg_revenue: f64,
    pub avg_budget: f64,
    pub avg_roi: f64,
    pub avg_rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_trends() {
        let json = r#"{
            "yearly": [{"year": 1997, "movie_count": 110, "avg_rating": 6.2, "avg_popularity": 20.1,
                "avg_runtime": 112.0, "avg_budget": 4.1e7, "total_budget": 3.5e9,
                "avg_revenue": 1.1e8, "total_revenue": 9.8e9, "avg_roi": 310.2}],
            "monthly": [{"month": 12.0, "month_name": "Dec", "movie_count": 340,
                "avg_revenue": 1.5e8, "avg_budget": 5.0e7, "avg_roi": 220.0, "avg_rating": 6.5}]
        }"#;
        let trends: TrendsData = serde_json::from_str(json).unwrap();
        assert_eq!(trends.yearly[0].year, 1997);
        assert_eq!(trends.monthly[0].month, 12.0);
        assert_eq!(trends.monthly[0].month_name, "Dec");
    }
}
