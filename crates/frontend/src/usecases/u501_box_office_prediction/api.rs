use contracts::usecases::u501_box_office_prediction::{
    PredictionInsights, PredictionRequest, PredictionResult, TrainingSummary,
};

use crate::shared::http::{ApiClient, ApiError, Fetch, RequestOptions};

const BASE_URL: &str = "/api/prediction";

impl<F: Fetch> ApiClient<F> {
    /// Retrain the revenue models on the service and compare them
    pub async fn train_model(&self) -> Result<TrainingSummary, ApiError> {
        self.request(&format!("{}/train", BASE_URL), RequestOptions::post())
            .await
    }

    /// Model comparison and feature importances; trains first if needed
    pub async fn get_prediction_insights(&self) -> Result<PredictionInsights, ApiError> {
        self.get(&format!("{}/insights", BASE_URL)).await
    }

    /// Predict box office revenue for a movie
    ///
    /// Only the fields set on `request` are sent.
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ApiError> {
        let body = serde_json::to_string(request).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.request(
            &format!("{}/predict", BASE_URL),
            RequestOptions::post().with_body(body),
        )
        .await
    }
}
