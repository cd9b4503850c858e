use contracts::dashboards::d403_genres::GenreData;

use crate::shared::http::{ApiClient, ApiError, Fetch};

impl<F: Fetch> ApiClient<F> {
    /// Genre counts, frequent genre combinations and per-genre statistics
    pub async fn get_genres(&self) -> Result<GenreData, ApiError> {
        self.get("/api/genres").await
    }
}
