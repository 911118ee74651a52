mod cli;

use clap::Parser;
use colored::Colorize;
use mossy::Config;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cli::{dispatch, Cli};

fn init_logging(verbose: bool) {
    let default = if verbose { "mossy=debug" } else { "mossy=warn" };
    let filter = EnvFilter::try_from_env("MOSSY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = Config::load(cli.config.as_deref()).and_then(|config| dispatch(cli.command, &config));

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
