//! Exit codes for the killlist binary.

use backend::ProcError;
use std::process::ExitCode;

/// Outcome of a run as seen by the calling shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// The list was printed, possibly empty.
    Success = 0,
    /// Identity lookup, root enumeration or encoding failed; nothing was printed.
    Failure = 1,
}

impl From<&ProcError> for ExitStatus {
    fn from(err: &ProcError) -> Self {
        match err {
            ProcError::Identity(_) | ProcError::ProcRoot { .. } | ProcError::Serialize(_) => {
                ExitStatus::Failure
            }
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}
