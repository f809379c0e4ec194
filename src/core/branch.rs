//! Branch listing parsing and task identifier extraction.
//!
//! `git branch` marks the checked-out branch with a leading `* ` and indents
//! every other entry with two spaces. [`Branch::parse`] tolerates both and
//! recovers the bare name. [`TaskId`] derives an optional `PROJECT-NUMBER`
//! pair from a branch name such as `AB-12-fix-login`, used to tag commit
//! messages.

use std::fmt;

/// One entry of the branch listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub is_current: bool,
}

impl Branch {
    /// Parses one raw listing line. Never fails: any input yields a Branch,
    /// worst case an empty name that is not current.
    pub fn parse(line: &str) -> Self {
        Branch {
            name: line.trim_matches(['*', ' ']).to_string(),
            is_current: line.starts_with('*'),
        }
    }

    /// The task identifier derived from this branch's name, if any.
    pub fn task(&self) -> Option<TaskId> {
        TaskId::extract(&self.name)
    }
}

/// A `PROJECT-NUMBER` pair parsed from a branch name.
///
/// The number round-trips through integer parsing, so leading zeros collapse:
/// `AB-007` extracts as project `AB`, number 7, and formats back as `AB-7`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskId {
    pub project: String,
    pub number: u64,
}

impl TaskId {
    /// Derives a task identifier from a branch name.
    ///
    /// The name is split on `-`; only the first two segments participate.
    /// Segment 0 must be non-empty and entirely ASCII uppercase, segment 1
    /// must parse whole as a base-10 non-negative integer. Trailing segments
    /// (`AB-12-extra-stuff`) are ignored.
    pub fn extract(branch_name: &str) -> Option<TaskId> {
        let mut segments = branch_name.split('-');
        let project = segments.next()?;
        let number = segments.next()?;

        if project.is_empty() || !project.chars().all(|c| c.is_ascii_uppercase()) {
            return None;
        }

        // std's u64 parser tolerates a leading `+`; the task contract does not.
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let number = number.parse::<u64>().ok()?;

        Some(TaskId {
            project: project.to_string(),
            number,
        })
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.project, self.number)
    }
}
