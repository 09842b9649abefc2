use crate::{
    app_lib::AppConfig,
    features::users::{FetchState, UserListProvider, UsersService},
    routes::users::{LoadingMode, UserDetailView},
};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub id: String,
    pub loading_mode: LoadingMode,
}

/// Execute the show action: render the detail view from every provider
/// snapshot until the fetch settles.
/// # Errors
/// Returns an error if the users service cannot be built.
pub async fn execute(args: Args) -> Result<()> {
    let service = Arc::new(UsersService::new(&args.config)?);
    info!("fetching users from {}", service.url());

    let provider = UserListProvider::mount(service);

    for frame in render_frames(provider.subscribe(), &args.id, args.loading_mode).await {
        println!("{frame}");
    }

    Ok(())
}

/// Re-derives the view from each snapshot. A frame is emitted once the fetch
/// settles, and for the pending snapshot only when it renders distinctly.
async fn render_frames(
    mut state: watch::Receiver<FetchState>,
    id: &str,
    mode: LoadingMode,
) -> Vec<UserDetailView> {
    let mut frames = Vec::new();

    loop {
        let snapshot = state.borrow_and_update().clone();
        let view = UserDetailView::resolve(&snapshot, id, mode);
        debug!("rendered {view:?} (loading: {})", snapshot.loading);

        if !snapshot.loading || view == UserDetailView::Loading {
            frames.push(view);
        }

        if !snapshot.loading {
            break;
        }

        if state.changed().await.is_err() {
            warn!("users fetch ended without a result");
            break;
        }
    }

    frames
}
