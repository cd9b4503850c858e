//! Chart color palette.
//!
//! Fixed colors shared by every chart: named accents, a sequential gradient,
//! the categorical genre palette and the positive/negative pair used for
//! signed values such as ROI.

pub const PRIMARY: &str = "#3b82f6";
pub const SECONDARY: &str = "#10b981";
pub const WARNING: &str = "#f59e0b";
pub const DANGER: &str = "#ef4444";
pub const INFO: &str = "#6366f1";

/// Sequential gradient, blue to red
pub const GRADIENT: [&str; 8] = [
    "#3b82f6", "#6366f1", "#8b5cf6", "#a855f7", "#d946ef", "#ec4899", "#f43f5e", "#ef4444",
];

/// Categorical palette, cycled by [`get_genre_color`]
pub const GENRE_PALETTE: [&str; 15] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#6366f1", "#ec4899", "#14b8a6", "#f97316",
    "#8b5cf6", "#06b6d4", "#84cc16", "#eab308", "#22c55e", "#a855f7", "#0ea5e9",
];

pub const POSITIVE: &str = "#10b981";
pub const NEGATIVE: &str = "#ef4444";

/// Color of the `index`-th category; wraps around after the palette is exhausted
pub fn get_genre_color(index: usize) -> &'static str {
    GENRE_PALETTE[index % GENRE_PALETTE.len()]
}

/// Positive color for values >= 0, negative color otherwise (NaN included)
pub fn get_value_color(value: f64) -> &'static str {
    if value >= 0.0 {
        POSITIVE
    } else {
        NEGATIVE
    }
}
