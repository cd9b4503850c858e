//! Transport core: the generic envelope-unwrapping request and its plumbing

pub mod client;
pub mod error;
pub mod fetch;

#[cfg(target_arch = "wasm32")]
pub mod gloo_fetch;
#[cfg(not(target_arch = "wasm32"))]
pub mod reqwest_fetch;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{with_query, ApiClient, DefaultFetch};
pub use error::{ApiError, ApiErrorKind, FetchError};
pub use fetch::{Fetch, HttpMethod, HttpRequest, HttpResponse, RequestOptions};
