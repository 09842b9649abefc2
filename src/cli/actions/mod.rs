pub mod list;
pub mod serve;
pub mod show;

// Internal "interpreter" for `Action`.
mod run;

#[derive(Debug)]
pub enum Action {
    List(list::Args),
    Show(show::Args),
    Serve(serve::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
