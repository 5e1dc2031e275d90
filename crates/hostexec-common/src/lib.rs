//! # hostexec common
//!
//! Shared types for the hostexec execution layer.
//!
//! This crate holds the pieces every other hostexec crate builds on:
//! - Error types for launch-side failures (fork, shell, redirect setup)
//! - Termination status and verdict types for completed invocations

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::{ExecError, ExecResult};
pub use types::{ExecutionOutcome, ExitClass, TerminationStatus};
