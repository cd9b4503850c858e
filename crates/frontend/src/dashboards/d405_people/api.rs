use contracts::dashboards::d405_people::{PeopleKind, PersonStats, TopNQuery};

use crate::shared::http::{with_query, ApiClient, ApiError, Fetch};

impl<F: Fetch> ApiClient<F> {
    /// Top `top_n` entries of a ranking, ordered by total revenue
    pub async fn get_people(
        &self,
        kind: PeopleKind,
        top_n: u32,
    ) -> Result<Vec<PersonStats>, ApiError> {
        let path = with_query(kind.path(), &TopNQuery { top_n })?;
        self.get(&path).await
    }

    /// Directors with at least two movies
    pub async fn get_directors(&self, top_n: u32) -> Result<Vec<PersonStats>, ApiError> {
        self.get_people(PeopleKind::Directors, top_n).await
    }

    pub async fn get_actors(&self, top_n: u32) -> Result<Vec<PersonStats>, ApiError> {
        self.get_people(PeopleKind::Actors, top_n).await
    }

    /// Production companies
    pub async fn get_companies(&self, top_n: u32) -> Result<Vec<PersonStats>, ApiError> {
        self.get_people(PeopleKind::Companies, top_n).await
    }
}
