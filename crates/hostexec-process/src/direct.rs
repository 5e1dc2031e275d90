//! Direct execution of an absolute path with an explicit argument vector.
//!
//! No PATH search is performed: the path is handed to `execv` exactly as
//! given. The invoked program's own `argv[0]` is the base name of the path,
//! per Unix convention; the supplied arguments follow in order.

use std::convert::Infallible;
use std::ffi::CString;

use hostexec_common::{ExecError, ExecResult, ExecutionOutcome};
use nix::errno::Errno;
use nix::unistd::execv;
use tracing::{debug, error, info_span};

use crate::spawn::{fork_child, wait_for_child};
use crate::status::{evaluate, EXIT_CANNOT_EXECUTE, EXIT_COMMAND_NOT_FOUND};
use crate::validation::validate_command_path;

/// An executable path plus its ordered argument list.
///
/// Built once per invocation and consumed by the runner that launches it.
/// The path is used verbatim; arguments are passed to the program as given,
/// after the conventional base-name `argv[0]`.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub path: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a spec for the given absolute executable path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a sequence of arguments in order.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Build the child argument vector: `[base name, args...]`.
    ///
    /// The terminating NUL entry is supplied by the exec boundary itself.
    pub(crate) fn to_argv(&self) -> ExecResult<(CString, Vec<CString>)> {
        validate_command_path(&self.path)?;

        let path = CString::new(self.path.as_str())
            .map_err(|_| ExecError::invalid_command("command path contains a NUL byte"))?;

        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(
            CString::new(command_basename(&self.path))
                .map_err(|_| ExecError::invalid_command("command path contains a NUL byte"))?,
        );
        for arg in &self.args {
            argv.push(CString::new(arg.as_str()).map_err(|_| {
                ExecError::invalid_command(format!("argument `{}` contains a NUL byte", arg))
            })?);
        }

        Ok((path, argv))
    }
}

/// Final path component of a command path, or the whole path when it has no
/// directory prefix. Supplies the invoked program's `argv[0]`.
pub fn command_basename(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

/// Run an executable directly, bypassing the shell.
///
/// `command_path` is treated as an absolute path; no PATH search is
/// performed. Blocks until the child terminates - there is no timeout, so a
/// hung child blocks the caller indefinitely.
///
/// Launch-side failures (invalid spec, fork) come back as errors; once a
/// child existed, its fate arrives as an [`ExecutionOutcome`], including the
/// case where the image could not be replaced (reported by the child as a
/// resolution-failure exit code, never through shared control flow).
pub fn run_direct(command_path: &str, args: &[String]) -> ExecResult<ExecutionOutcome> {
    let spec = CommandSpec::new(command_path).args(args.iter().cloned());
    run_spec(&spec)
}

/// Run a prepared [`CommandSpec`].
pub fn run_spec(spec: &CommandSpec) -> ExecResult<ExecutionOutcome> {
    let _span = info_span!("direct_exec", command = %spec.path).entered();

    let (path, argv) = spec.to_argv()?;
    debug!("command path: {}", spec.path);
    debug!("command name: {}", command_basename(&spec.path));
    for (index, arg) in spec.args.iter().enumerate() {
        debug!("command arg{}: {}", index + 1, arg);
    }

    let child = fork_child(&spec.path, || exec_image(&path, &argv))?;
    debug!("spawned child with PID {}", child);

    let status = wait_for_child(child)?;
    debug!("child {} {}", child, status);
    Ok(evaluate(status))
}

/// Child-side continuation: replace the process image, or terminate the
/// child with a status derived from the exec error.
///
/// Runs only on the child side of the fork. On success this never returns;
/// on failure the error reaches the parent exclusively through the
/// termination status picked up by the wait.
pub(crate) fn exec_image(path: &CString, argv: &[CString]) -> Infallible {
    match execv(path, argv) {
        Ok(never) => match never {},
        Err(errno) => {
            error!("execv of {:?} failed: {}", path, errno);
            std::process::exit(exec_failure_code(errno));
        }
    }
}

/// Map an exec errno onto the shell's reserved exit codes, so resolution
/// failures classify identically on the shell and direct paths.
fn exec_failure_code(errno: Errno) -> i32 {
    match errno {
        Errno::ENOENT | Errno::ENOTDIR => EXIT_COMMAND_NOT_FOUND,
        Errno::EACCES | Errno::EPERM | Errno::ENOEXEC => EXIT_CANNOT_EXECUTE,
        other => other as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_basename() {
        assert_eq!(command_basename("/bin/echo"), "echo");
        assert_eq!(command_basename("/usr/local/bin/my-tool"), "my-tool");
        assert_eq!(command_basename("standalone"), "standalone");
        assert_eq!(command_basename("/bin/"), "");
    }

    #[test]
    fn test_argv_starts_with_basename() {
        let spec = CommandSpec::new("/bin/echo").arg("hello").arg("world");
        let (path, argv) = spec.to_argv().unwrap();

        assert_eq!(path.to_str().unwrap(), "/bin/echo");
        assert_eq!(argv.len(), 3);
        assert_eq!(argv[0].to_str().unwrap(), "echo");
        assert_eq!(argv[1].to_str().unwrap(), "hello");
        assert_eq!(argv[2].to_str().unwrap(), "world");
    }

    #[test]
    fn test_argv_with_no_arguments_has_length_one() {
        let spec = CommandSpec::new("/bin/true");
        let (_, argv) = spec.to_argv().unwrap();
        assert_eq!(argv.len(), 1);
        assert_eq!(argv[0].to_str().unwrap(), "true");
    }

    #[test]
    fn test_empty_path_is_rejected_locally() {
        let spec = CommandSpec::new("");
        assert!(matches!(
            spec.to_argv(),
            Err(ExecError::InvalidCommand { .. })
        ));
    }

    #[test]
    fn test_nul_bytes_are_rejected() {
        let spec = CommandSpec::new("/bin/e\0cho");
        assert!(matches!(
            spec.to_argv(),
            Err(ExecError::InvalidCommand { .. })
        ));

        let spec = CommandSpec::new("/bin/echo").arg("he\0llo");
        assert!(matches!(
            spec.to_argv(),
            Err(ExecError::InvalidCommand { .. })
        ));
    }

    #[test]
    fn test_exec_failure_code_mapping() {
        assert_eq!(exec_failure_code(Errno::ENOENT), EXIT_COMMAND_NOT_FOUND);
        assert_eq!(exec_failure_code(Errno::ENOTDIR), EXIT_COMMAND_NOT_FOUND);
        assert_eq!(exec_failure_code(Errno::EACCES), EXIT_CANNOT_EXECUTE);
        assert_eq!(exec_failure_code(Errno::ENOEXEC), EXIT_CANNOT_EXECUTE);
        assert_eq!(exec_failure_code(Errno::ENOMEM), Errno::ENOMEM as i32);
    }
}
