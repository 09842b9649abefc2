use crate::{
    app_lib::config::DEFAULT_API_BASE_URL,
    server::DEFAULT_CORS_ORIGIN,
};
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("userdeck")
        .about("Users directory client")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Base URL of the users API")
                .default_value(DEFAULT_API_BASE_URL)
                .env("USERDECK_API_URL")
                .global(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("USERDECK_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(Command::new("list").about("List all users"))
        .subcommand(
            Command::new("show")
                .about("Show one user by id")
                .arg(
                    Arg::new("id")
                        .help("User id")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("distinguish-loading")
                        .long("distinguish-loading")
                        .help("Render a loading state instead of \"User not found\" while the fetch is pending")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("serve")
                .about("Serve the users API")
                .arg(
                    Arg::new("port")
                        .short('p')
                        .long("port")
                        .help("Port to listen on")
                        .default_value("8000")
                        .env("USERDECK_PORT")
                        .value_parser(clap::value_parser!(u16)),
                )
                .arg(
                    Arg::new("cors-origin")
                        .long("cors-origin")
                        .help("Frontend origin allowed to call the API")
                        .default_value(DEFAULT_CORS_ORIGIN)
                        .env("USERDECK_CORS_ORIGIN"),
                ),
        )
}
