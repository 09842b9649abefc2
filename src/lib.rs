//! Users directory client: a fetch service for the `/users` endpoint, a
//! provider that tracks the fetch lifecycle, and terminal views that render
//! its snapshots. The companion REST API lives in [`server`].

pub mod app_lib;
pub mod cli;
pub mod features;
pub mod routes;
pub mod server;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
