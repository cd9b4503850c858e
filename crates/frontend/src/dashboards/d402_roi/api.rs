use contracts::dashboards::d402_roi::RoiData;

use crate::shared::http::{ApiClient, ApiError, Fetch};

impl<F: Fetch> ApiClient<F> {
    /// ROI statistics, distribution, best/worst movies and genre/budget breakdowns
    pub async fn get_roi(&self) -> Result<RoiData, ApiError> {
        self.get("/api/roi").await
    }
}
