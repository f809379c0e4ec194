//! Git Shorthand - A lightweight Rust CLI shorthand layer over the git CLI.
//!
//! This library provides the core functionality for git-shorthand: mapping
//! short verbs onto git operations, decorating commit messages with a task
//! identifier parsed from the current branch name, and rendering a bounded
//! terminal-height-aware status report after every command.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which
//! provides:
//! - The external tool runner (every git call funnels through one interface)
//! - Branch listing parsing and task identifier extraction
//! - Commit message decoration with a configurable template
//! - Point-in-time repository snapshots and report rendering
//! - Error handling and result types
//! - The persisted message-format store

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    decorate,
    is_valid_template,
    print_error,
    print_info,
    print_success,
    render,
    terminal_height,

    Branch,

    CommandRunner,

    FileFormatStore,
    // Error handling
    GitShorthandError,

    MessageFormatStore,

    RepoSnapshot,
    Result,

    ShellRunner,

    TaskId,

    DEFAULT_FORMAT,
    FALLBACK_LINE_BUDGET,
    GRAPH_LINE_CAP,
};
