//! Pre-fork validation of command specifications.
//!
//! Only locally checkable invariants live here. Whether a non-empty path
//! resolves to a launchable image is deliberately left to launch time: that
//! failure surfaces through the child's termination status, exactly like a
//! command the shell cannot find.

use hostexec_common::{ExecError, ExecResult};

/// Reject a command path that cannot name an executable at all.
pub fn validate_command_path(path: &str) -> ExecResult<()> {
    if path.is_empty() {
        return Err(ExecError::invalid_command("command path is empty"));
    }
    Ok(())
}
