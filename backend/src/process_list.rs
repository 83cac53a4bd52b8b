//! Process listing: find the invoking user's processes and name them.

use crate::identity::{CurrentUser, IdentityProvider};
use crate::source::{HostProc, ProcSource};
use crate::types::{ProcError, ProcessEntry};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{debug, trace};

/// Parses a metadata directory name as a pid.
///
/// Only plain decimal digits are accepted, so pseudo-entries such as `self`
/// or `sys` and signed forms like `+5` are rejected.
pub fn parse_pid(name: &OsStr) -> Option<u32> {
    let name = name.to_str()?;
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}

/// Extracts the real UID from a status record.
///
/// The `Uid:` line lists real, effective, saved and filesystem UIDs; the real
/// one is the field right after the key. A `Uid:` line without a value is
/// passed over in favor of a later one.
pub fn real_uid(status: &str) -> Option<&str> {
    status
        .lines()
        .filter(|line| line.starts_with("Uid:"))
        .find_map(|line| line.split_whitespace().nth(1))
}

/// Extracts the process name from a stat record.
///
/// Takes the second whitespace-separated field and drops the wrapping
/// parentheses. A name containing whitespace comes back truncated.
pub fn stat_name(stat: &str) -> Option<&str> {
    let field = stat.split_whitespace().nth(1)?;
    let field = field.strip_prefix('(').unwrap_or(field);
    Some(field.strip_suffix(')').unwrap_or(field))
}

/// Resolves a display name: basename of the `exe` link, else the stat name.
pub fn resolve_name<S: ProcSource + ?Sized>(source: &S, pid_dir: &OsStr) -> Option<String> {
    match source.read_link(pid_dir, "exe") {
        Ok(target) => {
            if let Some(base) = target.file_name() {
                return Some(base.to_string_lossy().into_owned());
            }
            trace!(pid = ?pid_dir, target = %target.display(), "exe target has no file name");
        }
        Err(e) => trace!(pid = ?pid_dir, error = %e, "exe link unreadable, falling back to stat"),
    }

    let stat = match source.read(pid_dir, "stat") {
        Ok(stat) => String::from_utf8_lossy(&stat).into_owned(),
        Err(e) => {
            trace!(pid = ?pid_dir, error = %e, "stat unreadable");
            return None;
        }
    };
    stat_name(&stat).map(str::to_owned)
}

/// Builds the entry for one directory entry, or `None` if it must be skipped.
///
/// Every per-process failure lands here as `None`: the name is not a pid, the
/// process is gone or belongs to someone else, or no name can be resolved.
pub fn inspect<S: ProcSource + ?Sized>(
    source: &S,
    pid_dir: &OsStr,
    uid: &str,
) -> Option<ProcessEntry> {
    let pid = parse_pid(pid_dir)?;

    let status = match source.read(pid_dir, "status") {
        Ok(status) => String::from_utf8_lossy(&status).into_owned(),
        Err(e) => {
            trace!(pid, error = %e, "status unreadable, skipping");
            return None;
        }
    };
    if real_uid(&status) != Some(uid) {
        return None;
    }

    let Some(name) = resolve_name(source, pid_dir) else {
        trace!(pid, "no name could be resolved, skipping");
        return None;
    };
    Some(ProcessEntry::new(&name, pid))
}

/// Lists the processes owned by the user `identity` names, in directory order.
///
/// Fails only if the identity cannot be determined or the root cannot be listed.
pub fn list_owned_processes<S, I>(source: &S, identity: &I) -> Result<Vec<ProcessEntry>, ProcError>
where
    S: ProcSource + ?Sized,
    I: IdentityProvider + ?Sized,
{
    let uid = identity.current_uid()?;

    let names = source.entry_names().map_err(|e| ProcError::ProcRoot {
        path: source.root().to_path_buf(),
        source: e,
    })?;

    let processes: Vec<ProcessEntry> = names
        .iter()
        .filter_map(|name| inspect(source, name, &uid))
        .collect();

    debug!(
        root = %source.root().display(),
        uid = %uid,
        scanned = names.len(),
        owned = processes.len(),
        "process scan complete"
    );
    Ok(processes)
}

/// Lists the current user's processes from `root`.
pub fn list_processes_in(root: impl AsRef<Path>) -> Result<Vec<ProcessEntry>, ProcError> {
    list_owned_processes(&HostProc::with_root(root.as_ref()), &CurrentUser)
}

/// Lists the current user's processes from `/proc`.
pub fn list_processes() -> Result<Vec<ProcessEntry>, ProcError> {
    list_owned_processes(&HostProc::default(), &CurrentUser)
}
