use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_SCATTER_X: &str = "budget";
pub const DEFAULT_SCATTER_Y: &str = "revenue";
pub const DEFAULT_SCATTER_LIMIT: u32 = 500;

/// Query string of `GET /api/scatter`
///
/// Field order is the order of the encoded parameters: `x`, `y`, `limit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterQuery {
    pub x: String,
    pub y: String,
    pub limit: u32,
}

impl ScatterQuery {
    pub fn new(x: impl Into<String>, y: impl Into<String>, limit: u32) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            limit,
        }
    }
}

impl Default for ScatterQuery {
    fn default() -> Self {
        Self::new(DEFAULT_SCATTER_X, DEFAULT_SCATTER_Y, DEFAULT_SCATTER_LIMIT)
    }
}

/// One point of the scatter plot
///
/// The record carries the two requested axis columns plus `title`,
/// `release_year`, `genre_names` and `vote_average`. Axis names are chosen by
/// the caller, so the record is kept as the raw JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScatterPoint {
    pub fields: Map<String, Value>,
}

impl ScatterPoint {
    /// Numeric value of a column, `None` if missing or not a number
    pub fn value(&self, field: &str) -> Option<f64> {
        self.fields.get(field).and_then(Value::as_f64)
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    pub fn release_year(&self) -> Option<f64> {
        self.value("release_year")
    }

    pub fn vote_average(&self) -> Option<f64> {
        self.value("vote_average")
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.fields
            .get("genre_names")
            .and_then(Value::as_array)
            .map(|genres| genres.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// `(x, y)` pair for the given axes, `None` when either is missing
    pub fn xy(&self, x: &str, y: &str) -> Option<(f64, f64)> {
        Some((self.value(x)?, self.value(y)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = ScatterQuery::default();
        assert_eq!(query.x, "budget");
        assert_eq!(query.y, "revenue");
        assert_eq!(query.limit, 500);
    }

    #[test]
    fn test_point_accessors() {
        let json = r#"{"popularity": 150.4, "vote_average": 7.2, "title": "Avatar",
            "release_year": 2009, "genre_names": ["Action", "Adventure"]}"#;
        let point: ScatterPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.title(), Some("Avatar"));
        assert_eq!(point.xy("popularity", "vote_average"), Some((150.4, 7.2)));
        assert_eq!(point.xy("budget", "vote_average"), None);
        assert_eq!(point.genre_names(), vec!["Action", "Adventure"]);
        assert_eq!(point.release_year(), Some(2009.0));
    }

    #[test]
    fn test_point_is_kept_verbatim() {
        let raw = serde_json::json!({"budget": 237000000, "revenue": 2787965087u64, "title": "Avatar"});
        let point: ScatterPoint = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&point).unwrap(), raw);
    }
}
