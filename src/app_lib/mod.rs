//! Shared client utilities for API access, configuration and errors.
//!
//! Feature clients build on these helpers so every request is issued and
//! classified the same way. Nothing here stores state between calls.

pub mod api;
pub mod config;
pub mod errors;

pub use api::get_json;
pub use config::AppConfig;
pub use errors::FetchError;
