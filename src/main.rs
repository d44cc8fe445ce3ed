use std::process::ExitCode;

use clap::Parser;
use chatloc::cli::{Arguments, Command, ExitStatus};
use tracing_subscriber::EnvFilter;

/// Env var holding a tracing filter, e.g. `CHATLOC_LOG=chatloc=trace`.
const LOG_ENV: &str = "CHATLOC_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { "chatloc=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose);

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = chatloc::mcp::run_server() {
            eprintln!("Error: {}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match chatloc::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
