pub mod api_utils;
pub mod data_range;
pub mod debounce;
pub mod http;
pub mod number_format;
pub mod theme;
