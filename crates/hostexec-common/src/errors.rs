//! Error types for the hostexec execution layer.
//!
//! These variants cover launch-side failures only: the cases where the OS
//! primitive that creates or prepares a child could not do its job, so no
//! child termination status exists. Once a child has run, its fate is
//! reported through `types::ExecutionOutcome` instead of an error.

use thiserror::Error;

/// Result type alias for execution-layer operations.
pub type ExecResult<T> = std::result::Result<T, ExecError>;

/// Launch-side execution errors.
#[derive(Error, Debug, Clone)]
pub enum ExecError {
    /// The command specification failed local validation (empty path,
    /// embedded NUL byte). Nothing was forked.
    #[error("Invalid command: {reason}")]
    InvalidCommand { reason: String },

    /// Fork failed; no child process exists.
    #[error("Spawn failed for {command}: {reason}")]
    SpawnFailed { command: String, reason: String },

    /// The shell facility itself could not be invoked.
    #[error("Shell invocation failed for `{command_line}`: {reason}")]
    ShellUnavailable { command_line: String, reason: String },

    /// The redirect target could not be opened; no child was forked.
    #[error("Redirect target {path} could not be opened: {reason}")]
    RedirectFailed { path: String, reason: String },

    /// Waiting for a forked child failed.
    #[error("Wait for child {pid} failed: {reason}")]
    WaitFailed { pid: String, reason: String },
}

impl ExecError {
    pub fn invalid_command(reason: impl Into<String>) -> Self {
        Self::InvalidCommand {
            reason: reason.into(),
        }
    }

    pub fn spawn_failed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SpawnFailed {
            command: command.into(),
            reason: reason.into(),
        }
    }

    pub fn shell_unavailable(command_line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ShellUnavailable {
            command_line: command_line.into(),
            reason: reason.into(),
        }
    }

    pub fn redirect_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RedirectFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn wait_failed(pid: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::WaitFailed {
            pid: pid.into(),
            reason: reason.into(),
        }
    }
}
