use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Evaluation metrics of one trained regressor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
    /// R² on log-revenue, used to pick the best model
    pub r2_log: f64,
    pub cv_r2_mean: f64,
    pub cv_r2_std: f64,
}

/// Model name -> metrics
pub type ModelComparison = HashMap<String, ModelMetrics>;

/// Response of `POST /api/prediction/train`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub model_comparison: ModelComparison,
    pub best_model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_samples: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_samples: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

/// Response of `GET /api/prediction/insights`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInsights {
    pub model_comparison: ModelComparison,
    pub best_model: String,
    /// First ten entries of `all_features`
    pub top_features: Vec<FeatureImportance>,
    /// Sorted by importance, descending
    pub all_features: Vec<FeatureImportance>,
}

impl PredictionInsights {
    pub fn best_metrics(&self) -> Option<&ModelMetrics> {
        self.model_comparison.get(&self.best_model)
    }
}

/// Body of `POST /api/prediction/predict`
///
/// Only `budget` is required. Unset fields are left out of the JSON body so
/// the service applies its own defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub budget: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
}

impl PredictionRequest {
    pub fn new(budget: f64) -> Self {
        Self {
            budget,
            ..Default::default()
        }
    }

    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = Some(popularity);
        self
    }

    pub fn with_runtime(mut self, runtime: f64) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn with_vote_average(mut self, vote_average: f64) -> Self {
        self.vote_average = Some(vote_average);
        self
    }

    pub fn with_vote_count(mut self, vote_count: u64) -> Self {
        self.vote_count = Some(vote_count);
        self
    }

    pub fn with_release_date(mut self, year: i32, month: u32) -> Self {
        self.release_year = Some(year);
        self.release_month = Some(month);
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = Some(genres.into_iter().map(Into::into).collect());
        self
    }
}

/// Response of `POST /api/prediction/predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_revenue: f64,
    /// Percent
    pub predicted_roi: f64,
    pub model_used: String,
    /// Features the service actually used, echoed back
    pub input_features: PredictionRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_only_body() {
        let json = serde_json::to_value(PredictionRequest::new(1_000_000.0)).unwrap();
        assert_eq!(json, serde_json::json!({"budget": 1000000.0}));
    }

    #[test]
    fn test_builder_sets_fields() {
        let request = PredictionRequest::new(5e7)
            .with_runtime(128.0)
            .with_release_date(2024, 6)
            .with_genres(["Action", "Science Fiction"]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["runtime"], 128.0);
        assert_eq!(json["release_year"], 2024);
        assert_eq!(json["release_month"], 6);
        assert_eq!(json["genres"], serde_json::json!(["Action", "Science Fiction"]));
        assert!(json.get("popularity").is_none());
        assert!(json.get("vote_count").is_none());
    }

    #[test]
    fn test_echoed_features_keep_service_defaults() {
        let json = r#"{"predicted_revenue": 2.1e8, "predicted_roi": 320.5, "model_used": "Random Forest",
            "input_features": {"budget": 5e7, "popularity": 10.0, "runtime": 120.0, "vote_average": 6.0,
                "vote_count": 100, "release_year": 2024, "release_month": 6, "genres": []}}"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.input_features.popularity, Some(10.0));
        assert_eq!(result.input_features.genres, Some(vec![]));
    }

    #[test]
    fn test_training_summary_without_counts() {
        let json = r#"{"model_comparison": {"Ridge": {"rmse": 1.0, "mae": 2.0, "r2": 0.5,
            "r2_log": 0.6, "cv_r2_mean": 0.55, "cv_r2_std": 0.02}}, "best_model": "Ridge"}"#;
        let summary: TrainingSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.best_model, "Ridge");
        assert_eq!(summary.training_samples, None);
        assert_eq!(summary.model_comparison["Ridge"].r2_log, 0.6);
    }
}
