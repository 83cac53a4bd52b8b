//! Identity of the invoking user.

use crate::types::ProcError;
use nix::unistd::{getuid, User};
use tracing::debug;

/// Supplies the user identifier that process ownership is compared against.
///
/// The identifier is the decimal real UID as it appears on the `Uid:` line of
/// a status record, e.g. `"1000"`.
pub trait IdentityProvider {
    fn current_uid(&self) -> Result<String, ProcError>;
}

/// The real user of the running process.
///
/// The identity is the numeric UID from `getuid()`. A UID with no user
/// database entry (common in containers) is still accepted rather than
/// treated as an unknown user; only a failing lookup is an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentUser;

impl IdentityProvider for CurrentUser {
    fn current_uid(&self) -> Result<String, ProcError> {
        let uid = getuid();
        // A failed user database lookup is fatal; a UID without an entry is not.
        match User::from_uid(uid)? {
            Some(user) => debug!(uid = uid.as_raw(), user = %user.name, "resolved current user"),
            None => debug!(uid = uid.as_raw(), "current uid has no user database entry"),
        }
        Ok(uid.as_raw().to_string())
    }
}

/// A fixed identifier, for scanning on behalf of a known UID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedIdentity(pub String);

impl FixedIdentity {
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }
}

impl IdentityProvider for FixedIdentity {
    fn current_uid(&self) -> Result<String, ProcError> {
        Ok(self.0.clone())
    }
}
