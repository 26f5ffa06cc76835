//! formpack CLI
//!
//! Usage: formpack [COMMAND]
//!
//! Commands:
//!   watch   Rebuild the bundle whenever a template changes (default)
//!   build   Rebuild the bundle once and exit
//!   check   Compile every template without writing the bundle

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use ui::context::UiContext;

/// Logs go to stderr so `--json` keeps stdout to NDJSON only.
///
/// `-v` flags win over `FORMPACK_LOG`/`RUST_LOG`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("FORMPACK_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("formpack=warn")),
        1 => EnvFilter::new("formpack=info"),
        2 => EnvFilter::new("formpack=debug"),
        _ => EnvFilter::new("formpack=trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::debug!("formpack starting with args: {:?}", cli);

    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    let config = cli.config.as_deref();

    let result = match cli.command.clone().unwrap_or_default() {
        Commands::Watch { paths, prune } => {
            commands::watch::cmd_watch(config, &paths, prune, &ui).map(|()| ExitCode::SUCCESS)
        }
        Commands::Build { paths } => commands::build::cmd_build(config, &paths, &ui),
        Commands::Check { source } => commands::check::cmd_check(config, source, &ui),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            ui::error::print_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}
