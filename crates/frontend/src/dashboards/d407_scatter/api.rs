use contracts::dashboards::d407_scatter::{ScatterPoint, ScatterQuery};

use crate::shared::http::{with_query, ApiClient, ApiError, Fetch};

impl<F: Fetch> ApiClient<F> {
    /// Up to `limit` movies with both `x` and `y` columns present
    ///
    /// Axis names are sent as given; the service decides which columns exist.
    pub async fn get_scatter(
        &self,
        x: &str,
        y: &str,
        limit: u32,
    ) -> Result<Vec<ScatterPoint>, ApiError> {
        self.get_scatter_with(&ScatterQuery::new(x, y, limit)).await
    }

    /// Budget against revenue, 500 points
    pub async fn get_scatter_default(&self) -> Result<Vec<ScatterPoint>, ApiError> {
        self.get_scatter_with(&ScatterQuery::default()).await
    }

    pub async fn get_scatter_with(
        &self,
        query: &ScatterQuery,
    ) -> Result<Vec<ScatterPoint>, ApiError> {
        let path = with_query("/api/scatter", query)?;
        self.get(&path).await
    }
}
