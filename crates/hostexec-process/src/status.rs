//! Termination-status decoding and verdict evaluation.
//!
//! The packed status a wait-style call returns is decoded exactly once, at
//! the OS boundary, into `TerminationStatus`; nothing downstream re-inspects
//! raw integers. `evaluate` then reduces a decoded status to the
//! caller-facing verdict and emits one leveled diagnostic per class.

use hostexec_common::{ExecutionOutcome, ExitClass, TerminationStatus};
use nix::sys::wait::WaitStatus;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;
use tracing::{debug, error};

/// Exit code a shell reports when a command cannot be located.
pub const EXIT_COMMAND_NOT_FOUND: i32 = 127;

/// Exit code a shell reports when a command is found but cannot be executed.
pub const EXIT_CANNOT_EXECUTE: i32 = 126;

/// Decode a `waitpid` status (the direct-execution boundary).
pub fn decode_wait_status(status: WaitStatus) -> TerminationStatus {
    match status {
        WaitStatus::Exited(_, code) => TerminationStatus::Exited { code },
        WaitStatus::Signaled(_, signal, _) => TerminationStatus::Signaled {
            signal: signal as i32,
        },
        _ => TerminationStatus::Other,
    }
}

/// Decode a `std::process` exit status (the shell-facility boundary).
pub fn decode_exit_status(status: ExitStatus) -> TerminationStatus {
    if let Some(code) = status.code() {
        TerminationStatus::Exited { code }
    } else if let Some(signal) = status.signal() {
        TerminationStatus::Signaled { signal }
    } else {
        TerminationStatus::Other
    }
}

/// Reduce a termination status to the caller-facing verdict.
///
/// Exit code 0 is the only success. Codes 127 and 126 are kept apart from
/// other nonzero codes because the shell reserves them for "not found" and
/// "cannot execute", and the direct runners map their exec errors onto the
/// same two codes.
pub fn evaluate(status: TerminationStatus) -> ExecutionOutcome {
    match status {
        TerminationStatus::Exited { code: 0 } => {
            debug!("command completed successfully");
            ExecutionOutcome::succeeded()
        }
        TerminationStatus::Exited {
            code: EXIT_COMMAND_NOT_FOUND,
        } => {
            error!("command not found (exit code {})", EXIT_COMMAND_NOT_FOUND);
            ExecutionOutcome::failed(ExitClass::CommandNotFound)
        }
        TerminationStatus::Exited {
            code: EXIT_CANNOT_EXECUTE,
        } => {
            error!(
                "command could not be executed (exit code {})",
                EXIT_CANNOT_EXECUTE
            );
            ExecutionOutcome::failed(ExitClass::ExecPermission)
        }
        TerminationStatus::Exited { code } => {
            error!("command returned exit code {}", code);
            ExecutionOutcome::failed(ExitClass::NonZeroExit { code })
        }
        TerminationStatus::Signaled { signal } => {
            error!("command was terminated by signal {}", signal);
            ExecutionOutcome::failed(ExitClass::KilledBySignal { signal })
        }
        TerminationStatus::Other => {
            error!("command did not terminate for an unspecified reason");
            ExecutionOutcome::failed(ExitClass::Indeterminate)
        }
    }
}
