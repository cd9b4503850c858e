use contracts::dashboards::d406_correlations::CorrelationData;

use crate::shared::http::{ApiClient, ApiError, Fetch};

impl<F: Fetch> ApiClient<F> {
    /// Correlation matrix of the numeric movie attributes and the strongest pairs
    pub async fn get_correlations(&self) -> Result<CorrelationData, ApiError> {
        self.get("/api/correlations").await
    }
}
