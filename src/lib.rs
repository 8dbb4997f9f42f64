//! # Rade gateway client
//!
//! Card, IBAN and deposit inquiries plus Shahkar checks against the Rade
//! gateway. Inputs are normalized and validated locally, bearer tokens are
//! cached through a pluggable store and refreshed once when the gateway
//! answers 401.
//!
//! Modules:
//! - `config`: credentials and client settings
//! - `rules`: card/IBAN/mobile/national code validation
//! - `cache`: access token and token stores
//! - `auth`: token manager
//! - `client`: authenticated request execution
//! - `services`: per-endpoint services and result records

pub mod auth;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod helpers;
pub mod observability;
pub mod rade;
pub mod resilience;
pub mod rules;
pub mod services;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::config::{Credentials, ServiceConfig, SettingsConfig};
pub use crate::error::RadeError;
pub use crate::rade::RadeServices;
