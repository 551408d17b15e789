use std::process::ExitCode;

use clap::Parser;
use glean::cli::{Arguments, ExitStatus};
use tracing::Level;

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    match glean::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Diagnostics go to stderr so stdout stays parseable with `--format json`.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .init();
}
