use crate::server;
use anyhow::Result;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub cors_origin: String,
}

/// Execute the serve action.
/// # Errors
/// Returns an error if the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    info!(
        "starting users API on port {} (CORS origin: {})",
        args.port, args.cors_origin
    );

    server::new(args.port, &args.cors_origin).await
}
