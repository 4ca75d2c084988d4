use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use sentinel::args::Cli;
use sentinel::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("sentinel v{}", env!("CARGO_PKG_VERSION"));

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[sentinel] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
