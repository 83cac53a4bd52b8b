//! Lists the invoking user's processes on Linux.
//!
//! Scans the process-metadata tree, keeps the processes whose real UID matches
//! the current user, names each one from its `exe` link or its stat record, and
//! pairs it with a `kill <pid>` command. The tree and the identity are both
//! injectable through [`ProcSource`] and [`IdentityProvider`].

mod identity;
mod output;
mod process_list;
mod source;
mod types;

pub use identity::{CurrentUser, FixedIdentity, IdentityProvider};
pub use output::to_json;
pub use process_list::{
    inspect, list_owned_processes, list_processes, list_processes_in, parse_pid, real_uid,
    resolve_name, stat_name,
};
pub use source::{HostProc, ProcSource, DEFAULT_PROC_ROOT};
pub use types::{ProcError, ProcessEntry};
