//! Access to the process-metadata tree.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default location of the process-metadata tree.
pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Read-only view of a process-metadata tree keyed by pid directory name.
///
/// The lister only ever needs to list the root, read a per-process file and
/// resolve a per-process link, so that is all this exposes. Tests swap in
/// synthetic trees through this trait.
pub trait ProcSource {
    /// Root being scanned, used in diagnostics.
    fn root(&self) -> &Path;

    /// Names of the entries directly under the root, in enumeration order.
    ///
    /// An error here means the root itself cannot be listed and is fatal.
    /// Entries whose names cannot be read are left out.
    fn entry_names(&self) -> io::Result<Vec<OsString>>;

    /// Reads the raw bytes of `<root>/<pid_dir>/<file>`.
    ///
    /// Records are not guaranteed to be UTF-8: the kernel truncates process
    /// names by bytes, which can split a multi-byte character.
    fn read(&self, pid_dir: &OsStr, file: &str) -> io::Result<Vec<u8>>;

    /// Resolves the symlink at `<root>/<pid_dir>/<file>`.
    fn read_link(&self, pid_dir: &OsStr, file: &str) -> io::Result<PathBuf>;
}

/// The live process tree of the host, read through `std::fs`.
#[derive(Debug, Clone)]
pub struct HostProc {
    root: PathBuf,
}

impl HostProc {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, pid_dir: &OsStr, file: &str) -> PathBuf {
        self.root.join(pid_dir).join(file)
    }
}

impl Default for HostProc {
    fn default() -> Self {
        Self::with_root(DEFAULT_PROC_ROOT)
    }
}

impl ProcSource for HostProc {
    fn root(&self) -> &Path {
        &self.root
    }

    fn entry_names(&self) -> io::Result<Vec<OsString>> {
        let names = fs::read_dir(&self.root)?
            .filter_map(|entry| entry.ok().map(|e| e.file_name()))
            .collect();
        Ok(names)
    }

    fn read(&self, pid_dir: &OsStr, file: &str) -> io::Result<Vec<u8>> {
        fs::read(self.path(pid_dir, file))
    }

    fn read_link(&self, pid_dir: &OsStr, file: &str) -> io::Result<PathBuf> {
        fs::read_link(self.path(pid_dir, file))
    }
}
