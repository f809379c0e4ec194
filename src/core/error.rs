//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitShorthandError`] which covers every failure mode of
//! git-shorthand. It uses `thiserror` for ergonomic error definitions and keeps
//! the taxonomy deliberately small: an invocation either completes its mutation
//! and reprints the status report, or it reports exactly one of these errors.
//!
//! # Public API
//! - [`GitShorthandError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitShorthandError>`
//!
//! # Error Categories
//! - **Repository detection**: The working directory is not under git control
//! - **Tool invocation**: A git call exited non-zero or timed out
//! - **Dispatch**: The verb token matches no known command
//! - **Configuration**: I/O and JSON errors from the persisted message format

use thiserror::Error;

/// Domain-specific error types for git-shorthand
#[derive(Error, Debug)]
pub enum GitShorthandError {
    /// The status probe reported that the working directory is not inside a
    /// git repository. Short-circuits every further query for the invocation.
    #[error("Not a git repository")]
    NotARepository,

    /// A git call exited with a non-zero status for any reason other than the
    /// distinguished "not a repository" probe failure. Carries the tool's
    /// combined stdout/stderr verbatim.
    #[error("git command failed: {output}")]
    ToolInvocation { output: String },

    /// A git call exceeded the per-call timeout and was killed.
    #[error("git command timed out: {command}")]
    ToolTimeout { command: String },

    /// The dispatched verb string matches none of the recognized commands.
    #[error("Unknown verb: {verb}")]
    UnknownVerb { verb: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GitShorthandError {
    /// True when the error is the distinguished non-repository signal, which
    /// callers report as a single plain message rather than a diagnostic dump.
    pub fn is_not_a_repository(&self) -> bool {
        matches!(self, GitShorthandError::NotARepository)
    }
}

pub type Result<T> = std::result::Result<T, GitShorthandError>;
