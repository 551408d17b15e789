use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{docs::docs, extract::extract, init::init},
    exit_status::ExitStatus,
};

/// Dispatch to the handler of the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Docs(cmd)) => docs(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
