//! Data types and error definitions for process listing.

use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A display-friendly process entry: a title and the command that terminates it.
///
/// Both fields are derived from the same pid at construction, so the pid in
/// `title` always matches the one in `command`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessEntry {
    title: String,
    command: String,
}

impl ProcessEntry {
    pub fn new(name: &str, pid: u32) -> Self {
        Self {
            title: format!("{} ({})", name, pid),
            command: format!("kill {}", pid),
        }
    }

    /// `"<name> (<pid>)"`
    pub fn title(&self) -> &str {
        &self.title
    }

    /// `"kill <pid>"`
    pub fn command(&self) -> &str {
        &self.command
    }
}

/// Errors that abort a scan. Per-process failures never show up here.
#[derive(Error, Debug)]
pub enum ProcError {
    #[error("Failed to determine current user: {0}")]
    Identity(String),
    #[error("Failed to read {}: {source}", .path.display())]
    ProcRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to encode process list: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<nix::Error> for ProcError {
    fn from(err: nix::Error) -> Self {
        ProcError::Identity(err.to_string())
    }
}
