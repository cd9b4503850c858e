use serde::{Deserialize, Serialize};

/// Default ranking size for the directors/actors/companies endpoints
pub const DEFAULT_TOP_N: u32 = 20;

/// Query string of the ranking endpoints: `?top_n=N`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopNQuery {
    pub top_n: u32,
}

impl Default for TopNQuery {
    fn default() -> Self {
        Self { top_n: DEFAULT_TOP_N }
    }
}

/// Which ranking to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeopleKind {
    Directors,
    Actors,
    Companies,
}

impl PeopleKind {
    pub const ALL: [PeopleKind; 3] = [
        PeopleKind::Directors,
        PeopleKind::Actors,
        PeopleKind::Companies,
    ];

    /// Endpoint path of the ranking
    pub fn path(&self) -> &'static str {
        match self {
            PeopleKind::Directors => "/api/directors",
            PeopleKind::Actors => "/api/actors",
            PeopleKind::Companies => "/api/companies",
        }
    }
}

/// One row of a directors/actors/companies ranking
///
/// Exactly one of `director`, `actor`, `company` is filled depending on the
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub movie_count: u64,
    pub total_revenue: f64,
    pub avg_revenue: f64,
    pub total_budget: f64,
    pub avg_budget: f64,
    pub avg_rating: f64,
    pub avg_roi: f64,
}

impl PersonStats {
    /// Display name regardless of ranking kind
    pub fn name(&self) -> Option<&str> {
        self.director
            .as_deref()
            .or(self.actor.as_deref())
            .or(self.company.as_deref())
    }
}
