use serde::{Deserialize, Serialize};

/// Response of `GET /api/overview`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub total_movies: u64,
    /// Movies with both budget and revenue above zero
    pub movies_with_financial_data: u64,
    pub year_range: YearRange,
    pub budget: MoneyStats,
    pub revenue: MoneyStats,
    pub vote_average: RatingStats,
}

/// Release year span, `None` when the dataset has no dated movies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyStats {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingStats {
    pub mean: f64,
    pub median: f64,
}

impl OverviewStats {
    /// Share of movies carrying financial data, in percent
    pub fn financial_coverage(&self) -> f64 {
        if self.total_movies == 0 {
            0.0
        } else {
            self.movies_with_financial_data as f64 / self.total_movies as f64 * 100.0
        }
    }
}
