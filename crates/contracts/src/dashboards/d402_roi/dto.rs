use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response of `GET /api/roi`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiData {
    pub overview: RoiOverview,
    pub by_genre: Vec<GenreRoi>,
    pub by_budget_range: Vec<BudgetRangeRoi>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiOverview {
    pub statistics: RoiStatistics,
    /// Movie count per ROI bucket label
    pub distribution: HashMap<String, u64>,
    pub top_roi_movies: Vec<RoiMovie>,
    pub bottom_roi_movies: Vec<RoiMovie>,
}

/// ROI is expressed in percent: `(revenue - budget) / budget * 100`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiStatistics {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub profitable_count: u64,
    pub loss_count: u64,
    /// Percent of profitable movies
    pub profitable_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiMovie {
    pub title: String,
    pub budget: f64,
    pub revenue: f64,
    pub roi: f64,
    /// Can be absent for undated movies
    pub release_year: Option<f64>,
    pub genre_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreRoi {
    pub genre: String,
    pub mean_roi: f64,
    pub median_roi: f64,
    /// `None` for genres with a single movie
    pub std_roi: Option<f64>,
    pub count: u64,
    pub avg_budget: f64,
    pub avg_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRangeRoi {
    /// Bucket label such as "10-50M"
    pub budget_range: String,
    pub mean_roi: f64,
    pub median_roi: f64,
    pub count: u64,
    pub avg_revenue: f64,
}

impl RoiOverview {
    /// Distribution buckets sorted by movie count, largest first
    pub fn distribution_sorted(&self) -> Vec<(&str, u64)> {
        let mut buckets: Vec<(&str, u64)> = self
            .distribution
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        buckets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        buckets
    }
}
