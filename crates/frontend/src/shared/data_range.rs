/// Closed numeric interval of a data series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRange {
    pub min: f64,
    pub max: f64,
}

impl DataRange {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Minimum and maximum of `data`
///
/// Returns `None` for an empty slice (or one holding only NaN): there is no
/// meaningful range to draw an axis for. NaN entries are skipped.
pub fn get_data_range(data: &[f64]) -> Option<DataRange> {
    data.iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |range, v| match range {
            None => Some(DataRange { min: v, max: v }),
            Some(r) => Some(DataRange {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
}
