//! Core functionality for the git-shorthand tool.
//!
//! This module provides the fundamental building blocks: the external tool
//! runner, branch and task parsing, message decoration, the repository
//! snapshot, report rendering, and the persisted message-format store.

pub mod branch;
pub mod config;
pub mod dirs;
pub mod error;
pub mod message;
pub mod output;
pub mod report;
pub mod runner;
pub mod snapshot;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{GitShorthandError, Result};

// === Tool invocation ===
// Single narrow interface every git call funnels through
pub use runner::{shell_quote, CommandRunner, ShellRunner};

// === Branch and task parsing ===
pub use branch::{Branch, TaskId};

// === Message decoration ===
pub use message::{decorate, is_valid_template, DEFAULT_FORMAT, MSG_TOKEN, TASK_TOKEN};

// === Repository snapshot ===
pub use snapshot::{RepoSnapshot, GRAPH_LINE_CAP};

// === Status report rendering ===
pub use report::{render, terminal_height, FALLBACK_LINE_BUDGET};

// === Configuration ===
// Persisted message-format template store
pub use config::{FileFormatStore, MessageFormatStore};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_info, print_success};
