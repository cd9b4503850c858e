//! Data contracts shared between the analytics service and the frontend.
//!
//! Every endpoint answers with an [`shared::api_response::ApiResponse`] envelope;
//! the `dto` modules describe the `data` payload of each endpoint.

pub mod dashboards;
pub mod shared;
pub mod usecases;
