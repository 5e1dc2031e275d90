//! The fork boundary shared by the direct runners.
//!
//! `fork_child` is the only place this crate forks. The child side of the
//! fork is expressed as a continuation that cannot return: its only ways
//! out are an `execv` replacing the process image or a `process::exit`
//! reporting a setup failure through the termination status. The parent
//! side receives the child's PID and hands it to `wait_for_child`, which
//! waits on exactly that PID.

use std::convert::Infallible;

use hostexec_common::{ExecError, ExecResult, TerminationStatus};
use nix::errno::Errno;
use nix::sys::wait::waitpid;
use nix::unistd::{fork, ForkResult, Pid};
use tracing::error;

use crate::status::decode_wait_status;

/// Fork and run `child` on the child side of the fork.
///
/// Returns the child's PID to the parent. The child continuation never
/// returns; any failure inside it must terminate the child process, so the
/// failure reaches the parent exclusively through the status observed by
/// [`wait_for_child`]. A fork failure means no child exists at all.
pub fn fork_child<F>(command: &str, child: F) -> ExecResult<Pid>
where
    F: FnOnce() -> Infallible,
{
    // Safety: the child continuation only rebinds descriptors and execs;
    // everything it needs (argv, descriptors) is prepared before the fork.
    match unsafe { fork() } {
        Ok(ForkResult::Parent { child: pid }) => Ok(pid),
        Ok(ForkResult::Child) => match child() {},
        Err(errno) => {
            error!("fork failed: {}", errno);
            Err(ExecError::spawn_failed(command, errno.to_string()))
        }
    }
}

/// Block until the given child terminates and decode its status.
///
/// Waits on the exact PID returned by [`fork_child`] - never a wildcard
/// wait, so concurrent invocations in one process cannot reap each other's
/// children. An interrupted wait is retried.
pub fn wait_for_child(pid: Pid) -> ExecResult<TerminationStatus> {
    loop {
        match waitpid(pid, None) {
            Ok(status) => return Ok(decode_wait_status(status)),
            Err(Errno::EINTR) => continue,
            Err(errno) => {
                error!("waitpid for child {} failed: {}", pid, errno);
                return Err(ExecError::wait_failed(pid.to_string(), errno.to_string()));
            }
        }
    }
}
