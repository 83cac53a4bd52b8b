//! Command-line arguments.

use backend::DEFAULT_PROC_ROOT;
use clap::Parser;
use std::path::PathBuf;

/// Print the current user's processes as JSON, each with a command that kills it.
#[derive(Parser, Debug)]
#[command(name = "killlist", version, about)]
pub struct Cli {
    /// Process-metadata tree to scan.
    #[arg(long, env = "KILLLIST_PROC_ROOT", default_value = DEFAULT_PROC_ROOT, hide = true)]
    pub proc_root: PathBuf,
}
