//! Authenticated request execution and failure classification.

pub mod executor;
pub mod response;

pub use executor::{RequestExecutor, RequestOptions};
