mod cli;
mod commands;

use std::process::ExitCode;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use cli::Command;

const DEFAULT_LOG_DIRECTIVE: &str = "grinder=info";

fn main() -> ExitCode {
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let filter = match log_directive.parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(e) => {
            eprintln!("ignoring invalid log directive '{log_directive}': {e}");
            EnvFilter::from_default_env()
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("grinder v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match args.command {
        Command::Check { path, json } => commands::check(path, json),
        Command::Init { path, force } => commands::init(path, force),
        Command::Watch { path } => match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime.block_on(commands::watch(path)),
            Err(e) => Err(e.into()),
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
