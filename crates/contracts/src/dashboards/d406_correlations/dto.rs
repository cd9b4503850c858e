use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response of `GET /api/correlations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationData {
    pub top_correlations: Vec<CorrelationPair>,
    /// Row variable -> column variable -> Pearson coefficient
    pub correlation_matrix: HashMap<String, HashMap<String, f64>>,
    /// Matrix variables in display order
    pub variables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub var1: String,
    pub var2: String,
    pub correlation: f64,
}

impl CorrelationData {
    /// Coefficient between two variables, looked up in either direction
    pub fn coefficient(&self, a: &str, b: &str) -> Option<f64> {
        self.correlation_matrix
            .get(a)
            .and_then(|row| row.get(b))
            .or_else(|| self.correlation_matrix.get(b).and_then(|row| row.get(a)))
            .copied()
    }
}
