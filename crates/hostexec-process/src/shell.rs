//! Shell-line execution through `/bin/sh -c`.
//!
//! The whole command line is delegated to the shell in one call; quoting,
//! pipelines and globbing are the shell's business, not this crate's.

use std::process::Command;

use hostexec_common::{ExecError, ExecResult, ExecutionOutcome};
use tracing::{debug, error, info_span};

use crate::status::{decode_exit_status, evaluate};

/// Path of the shell facility used for command-line execution.
pub const SHELL_PATH: &str = "/bin/sh";

/// Run a full command line through the shell and reduce the result to a
/// verdict.
///
/// Blocks until the shell (and the command it supervises) terminates. The
/// facility's three-way contract maps as follows: failing to invoke the
/// shell at all is a launch error; a zero status is the clean success; any
/// other status is decoded and classified like a direct child's.
pub fn run_shell(command_line: &str) -> ExecResult<ExecutionOutcome> {
    let _span = info_span!("shell_exec", command = %command_line).entered();
    debug!("delegating to {} -c", SHELL_PATH);

    let status = Command::new(SHELL_PATH)
        .arg("-c")
        .arg(command_line)
        .status()
        .map_err(|e| {
            error!("shell could not be invoked: {}", e);
            ExecError::shell_unavailable(command_line, e.to_string())
        })?;

    Ok(evaluate(decode_exit_status(status)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostexec_common::ExitClass;

    #[test]
    fn test_zero_status_is_success() {
        let outcome = run_shell("exit 0").unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.class, ExitClass::CleanSuccess);
    }

    #[test]
    fn test_nonzero_status_is_classified() {
        let outcome = run_shell("exit 3").unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.class, ExitClass::NonZeroExit { code: 3 });
    }

    #[test]
    fn test_unknown_command_reports_not_found() {
        let outcome = run_shell("hostexec-no-such-command-zz").unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.class, ExitClass::CommandNotFound);
    }
}
