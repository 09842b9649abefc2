//! Fetch lifecycle for one mount of the users list.
//!
//! [`UserListProvider::mount`] spawns exactly one fetch and publishes the
//! resulting [`FetchState`] through a `watch` channel. Views either read the
//! latest snapshot or subscribe and re-render on every change. Dropping the
//! provider is the unmount: the outstanding fetch is aborted and its result is
//! never published.

use crate::{
    app_lib::FetchError,
    features::users::{client::UserSource, types::User},
};
use std::sync::Arc;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, error};

/// Snapshot of one fetch: pending until settled, then fulfilled or rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchState {
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for FetchState {
    fn default() -> Self {
        Self::pending()
    }
}

impl FetchState {
    /// State at mount time: loading, no users, no error.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            users: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Applies the fetch outcome. Result and `loading = false` land together.
    /// On failure the previous users are kept.
    pub fn settle(&mut self, result: Result<Vec<User>, FetchError>) {
        match result {
            Ok(users) => {
                self.users = users;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
    }
}

pub struct UserListProvider {
    state: watch::Receiver<FetchState>,
    task: JoinHandle<()>,
}

impl UserListProvider {
    /// Mounts a provider and starts its single fetch.
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime.
    pub fn mount<S: UserSource>(source: Arc<S>) -> Self {
        let (tx, rx) = watch::channel(FetchState::pending());

        let task = tokio::spawn(async move {
            let result = source.fetch_users().await;

            if let Err(err) = &result {
                error!("Error fetching users: {err:?}");
            }

            if tx.is_closed() {
                debug!("provider unmounted before fetch settled, discarding result");
                return;
            }

            tx.send_modify(|state| state.settle(result));
        });

        Self { state: rx, task }
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Receiver notified whenever the snapshot changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.clone()
    }

    /// Waits until the fetch has settled and returns that snapshot.
    pub async fn settled(&mut self) -> FetchState {
        if let Ok(state) = self.state.wait_for(|state| !state.loading).await {
            return state.clone();
        }

        // fetch task ended without publishing (panicked source)
        self.snapshot()
    }
}

impl Drop for UserListProvider {
    fn drop(&mut self) {
        self.task.abort();
    }
}
