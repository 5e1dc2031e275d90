//! # hostexec process
//!
//! Synchronous process-execution core for Unix hosts.
//!
//! This crate provides three blocking operations, all reducing a child's raw
//! termination status to a classified success/failure verdict:
//! - Shell-line execution through `/bin/sh -c`
//! - Direct execution of an absolute path with an explicit argument vector
//! - Direct execution with standard output redirected to a file
//!
//! Each operation spans exactly one parent/child process pair and blocks the
//! caller until that specific child has terminated; the wait names the exact
//! child PID and can never reap an unrelated process. No timeout is
//! provided: a hung child blocks the caller indefinitely.
//!
//! Diagnostics go through `tracing`. Concurrent callers may interleave log
//! lines; serializing them is the host's decision.

#[cfg(not(unix))]
compile_error!("hostexec-process requires a Unix host (fork/execv semantics)");

pub mod direct;
pub mod redirect;
pub mod shell;
pub mod spawn;
pub mod status;
pub mod validation;

// Re-export the operation surface
pub use direct::{command_basename, run_direct, run_spec, CommandSpec};
pub use redirect::{run_direct_redirected, run_spec_redirected, RedirectSpec};
pub use shell::run_shell;
pub use status::evaluate;
