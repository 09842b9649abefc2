//! Users feature: the record type, the fetch service for the users endpoint,
//! and the provider that owns one mount's fetch lifecycle.

pub mod client;
pub mod provider;
pub mod types;

pub use client::{UserSource, UsersService};
pub use provider::{FetchState, UserListProvider};
pub use types::User;
