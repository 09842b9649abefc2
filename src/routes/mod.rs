//! Terminal views over the users provider. Each view derives its output purely
//! from the latest [`FetchState`](crate::features::users::FetchState) snapshot.

pub mod users;
