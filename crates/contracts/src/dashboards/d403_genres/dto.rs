use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response of `GET /api/genres`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreData {
    /// Number of movies tagged with each genre
    pub genre_counts: HashMap<String, u64>,
    /// Top genre combinations, key is a comma separated sorted genre list
    pub genre_combinations: HashMap<String, u64>,
    pub genre_statistics: Vec<GenreStatistics>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreStatistics {
    pub genre: String,
    pub count: u64,
    pub avg_revenue: f64,
    pub total_revenue: f64,
    pub avg_budget: f64,
    pub avg_rating: f64,
    pub avg_roi: f64,
}

impl GenreData {
    /// Genres ordered by movie count, largest first; ties break alphabetically
    pub fn genres_by_count(&self) -> Vec<(&str, u64)> {
        let mut genres: Vec<(&str, u64)> = self
            .genre_counts
            .iter()
            .map(|(genre, count)| (genre.as_str(), *count))
            .collect();
        genres.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        genres
    }
}
