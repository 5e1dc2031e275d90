//! Termination status and verdict types for the execution layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a child process ended, decoded exactly once at the wait boundary.
///
/// The packed integer a wait-style call returns is never re-inspected after
/// this decode; every consumer works with these three cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationStatus {
    /// The child exited normally with the given code.
    Exited { code: i32 },
    /// The child was terminated by the given signal.
    Signaled { signal: i32 },
    /// Neither a normal exit nor a signal death (stopped or otherwise).
    Other,
}

impl fmt::Display for TerminationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationStatus::Exited { code } => write!(f, "exited with code {}", code),
            TerminationStatus::Signaled { signal } => {
                write!(f, "terminated by signal {}", signal)
            }
            TerminationStatus::Other => write!(f, "did not terminate"),
        }
    }
}

/// Diagnostic classification of a finished invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitClass {
    /// Exit code 0.
    CleanSuccess,
    /// Exit code 127: the command could not be located (shell convention).
    CommandNotFound,
    /// Exit code 126: the command was found but could not be executed.
    ExecPermission,
    /// Any other nonzero exit code.
    NonZeroExit { code: i32 },
    /// Terminated by the given signal.
    KilledBySignal { signal: i32 },
    /// The status indicated neither a clean exit nor a signal death.
    Indeterminate,
}

impl ExitClass {
    /// Check whether this class means the target could not be found or
    /// executed, as opposed to having run and failed.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(self, ExitClass::CommandNotFound | ExitClass::ExecPermission)
    }
}

impl fmt::Display for ExitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitClass::CleanSuccess => write!(f, "clean success"),
            ExitClass::CommandNotFound => write!(f, "command not found"),
            ExitClass::ExecPermission => write!(f, "command not executable"),
            ExitClass::NonZeroExit { code } => write!(f, "nonzero exit code {}", code),
            ExitClass::KilledBySignal { signal } => write!(f, "killed by signal {}", signal),
            ExitClass::Indeterminate => write!(f, "indeterminate termination"),
        }
    }
}

/// Verdict returned to callers: a success flag plus the classified
/// diagnostic behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    pub success: bool,
    pub class: ExitClass,
}

impl ExecutionOutcome {
    /// The one successful outcome: a clean exit.
    pub fn succeeded() -> Self {
        Self {
            success: true,
            class: ExitClass::CleanSuccess,
        }
    }

    /// A failed outcome carrying its classification.
    pub fn failed(class: ExitClass) -> Self {
        Self {
            success: false,
            class,
        }
    }
}
