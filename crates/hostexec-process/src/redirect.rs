//! Direct execution with standard output redirected to a file.
//!
//! Identical to the direct runner except that the target file is opened
//! before the fork and, in the child only, rebound onto standard output
//! ahead of the image replacement. The descriptor belongs to the child from
//! the moment the fork returns; the parent drops its handle immediately and
//! never touches it again.

use std::convert::Infallible;
use std::ffi::CString;
use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::{Path, PathBuf};

use hostexec_common::{ExecError, ExecResult, ExecutionOutcome};
use nix::unistd::dup2;
use tracing::{debug, error, info_span};

use crate::direct::{exec_image, CommandSpec};
use crate::spawn::{fork_child, wait_for_child};
use crate::status::evaluate;

/// Permission bits applied to a redirect target on creation.
pub const REDIRECT_TARGET_MODE: u32 = 0o664;

/// A redirect target: file path plus fixed creation semantics
/// (create if absent, truncate if present, write-only).
#[derive(Debug, Clone)]
pub struct RedirectSpec {
    pub path: PathBuf,
}

impl RedirectSpec {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the target for the child to inherit.
    fn open(&self) -> ExecResult<File> {
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(REDIRECT_TARGET_MODE)
            .open(&self.path)
            .map_err(|e| {
                error!(
                    "open of redirect target {} failed: {}",
                    self.path.display(),
                    e
                );
                ExecError::redirect_failed(self.path.display().to_string(), e.to_string())
            })
    }
}

/// Run an executable directly with its standard output rebound to a file.
///
/// The target is opened (create/truncate, mode `0o664`) before any fork; an
/// open failure fails the whole operation without creating a child. Blocks
/// until the child terminates, like [`crate::direct::run_direct`].
pub fn run_direct_redirected(
    output_path: impl AsRef<Path>,
    command_path: &str,
    args: &[String],
) -> ExecResult<ExecutionOutcome> {
    let spec = CommandSpec::new(command_path).args(args.iter().cloned());
    run_spec_redirected(&RedirectSpec::new(output_path.as_ref()), &spec)
}

/// Run a prepared [`CommandSpec`] with stdout redirected per `target`.
pub fn run_spec_redirected(
    target: &RedirectSpec,
    spec: &CommandSpec,
) -> ExecResult<ExecutionOutcome> {
    let _span = info_span!(
        "redirect_exec",
        command = %spec.path,
        output = %target.path.display(),
    )
    .entered();

    let (path, argv) = spec.to_argv()?;
    let output = target.open()?;
    debug!("redirecting child stdout to {}", target.path.display());

    let output_fd = output.as_raw_fd();
    let child = fork_child(&spec.path, || {
        child_redirect_and_exec(output_fd, &path, &argv)
    })?;
    // The descriptor now belongs to the child
    drop(output);
    debug!("spawned child with PID {}", child);

    let status = wait_for_child(child)?;
    debug!("child {} {}", child, status);
    Ok(evaluate(status))
}

/// Child-side continuation: rebind stdout to the target, then replace the
/// process image.
///
/// A failed rebind terminates the child before any exec attempt, so the two
/// failure modes stay distinguishable in the diagnostic log.
fn child_redirect_and_exec(output_fd: RawFd, path: &CString, argv: &[CString]) -> Infallible {
    if let Err(errno) = dup2(output_fd, nix::libc::STDOUT_FILENO) {
        error!("rebinding stdout to the redirect target failed: {}", errno);
        std::process::exit(errno as i32);
    }
    exec_image(path, argv)
}
