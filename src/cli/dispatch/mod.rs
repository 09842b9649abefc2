use crate::{
    app_lib::AppConfig,
    cli::actions::{list, serve, show, Action},
    routes::users::LoadingMode,
    server::{DEFAULT_CORS_ORIGIN, DEFAULT_PORT},
};
use anyhow::{anyhow, Context, Result};

/// # Errors
/// Returns an error if the subcommand is missing or its required arguments are absent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let (name, sub_m) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("missing subcommand"))?;

    let config = AppConfig::load(sub_m.get_one::<String>("api-url").map(String::as_str));

    match name {
        "list" => Ok(Action::List(list::Args { config })),
        "show" => {
            let id = sub_m
                .get_one::<String>("id")
                .cloned()
                .context("missing required argument: <ID>")?;
            let loading_mode = if sub_m.get_flag("distinguish-loading") {
                LoadingMode::Distinct
            } else {
                LoadingMode::NotFound
            };

            Ok(Action::Show(show::Args {
                config,
                id,
                loading_mode,
            }))
        }
        "serve" => Ok(Action::Serve(serve::Args {
            port: sub_m.get_one::<u16>("port").copied().unwrap_or(DEFAULT_PORT),
            cors_origin: sub_m
                .get_one::<String>("cors-origin")
                .cloned()
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        })),
        other => Err(anyhow!("unknown subcommand: {other}")),
    }
}
