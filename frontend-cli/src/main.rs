use backend::{list_owned_processes, to_json, CurrentUser, HostProc, ProcError};
use clap::Parser;
use cli::Cli;
use exit_codes::ExitStatus;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod exit_codes;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(json) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{}", json) {
                eprintln!("Error: failed to write output: {}", e);
                return ExitStatus::Failure.into();
            }
            ExitStatus::Success.into()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitStatus::from(&e).into()
        }
    }
}

/// Scans the configured tree and renders the whole document before anything is printed.
fn run(cli: &Cli) -> Result<String, ProcError> {
    debug!(root = %cli.proc_root.display(), "scanning process tree");
    let source = HostProc::with_root(&cli.proc_root);
    let processes = list_owned_processes(&source, &CurrentUser)?;
    to_json(&processes)
}

// Logs go to stderr so stdout carries only the JSON document.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
