use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        check::check,
        estimate::estimate,
        init::init,
        inspect::inspect,
        list::{languages, styles},
        translate::translate,
        validate::validate,
    },
    exit_status::ExitStatus,
};

/// Dispatch a parsed command line.
///
/// `serve` is handled in `main.rs` before this is called.
pub fn run(Arguments { verbose, command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Inspect(cmd)) => inspect(cmd),
        Some(Command::Translate(cmd)) => translate(cmd, verbose),
        Some(Command::Validate(cmd)) => validate(cmd),
        Some(Command::Estimate(cmd)) => estimate(cmd),
        Some(Command::Languages) => languages(),
        Some(Command::Styles) => styles(),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
