use crate::{
    app_lib::AppConfig,
    features::users::{UserListProvider, UsersService},
    routes::users::render_list,
};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
}

/// Execute the list action: mount a provider, wait for its fetch, print the list.
/// A failed fetch is rendered, not returned as an error.
/// # Errors
/// Returns an error if the users service cannot be built.
pub async fn execute(args: Args) -> Result<()> {
    let service = Arc::new(UsersService::new(&args.config)?);
    info!("fetching users from {}", service.url());

    let mut provider = UserListProvider::mount(service);
    let state = provider.settled().await;

    println!("{}", render_list(&state));

    Ok(())
}
