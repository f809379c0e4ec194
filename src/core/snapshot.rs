//! Point-in-time repository snapshot.
//!
//! [`RepoSnapshot::capture`] issues a fixed sequence of read-only git queries
//! and aggregates them into one immutable view. The snapshot is used both for
//! decision logic (current branch, task identifier) and for rendering the
//! status report. It is rebuilt wholesale after every mutating command so the
//! report always reflects post-mutation state; it is never patched in place.

use crate::core::{
    branch::Branch,
    error::{GitShorthandError, Result},
    runner::CommandRunner,
};

/// Upper bound on fetched commit-graph lines.
pub const GRAPH_LINE_CAP: usize = 64;

/// Marker git prints (to stderr) when invoked outside a repository.
const NOT_A_REPOSITORY_PREFIX: &str = "fatal: not a git repository";

/// Immutable aggregate of repository state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSnapshot {
    /// Raw `git status` text; only used as the repository probe.
    pub status_text: String,
    /// Character length of the working-tree diff. Doubles as the
    /// "has uncommitted changes" signal and the displayed count.
    pub changes_size: usize,
    /// Branches in the tool's native listing order.
    pub branches: Vec<Branch>,
    /// Pre-formatted commit graph lines, at most [`GRAPH_LINE_CAP`].
    pub graph_lines: Vec<String>,
    /// The current HEAD's commit message.
    pub last_commit_message: String,
}

impl RepoSnapshot {
    /// Captures a complete snapshot, or fails without exposing a partial one.
    ///
    /// The probe distinguishes "not a repository" from every other failure;
    /// on that signal the remaining queries are skipped entirely.
    pub fn capture(runner: &dyn CommandRunner) -> Result<Self> {
        let status_text = match runner.git(&["status"]) {
            Ok(text) => text,
            Err(GitShorthandError::ToolInvocation { output })
                if output.starts_with(NOT_A_REPOSITORY_PREFIX) =>
            {
                return Err(GitShorthandError::NotARepository);
            }
            Err(err) => return Err(err),
        };

        let diff = runner.git(&["diff"])?;

        let branches = runner
            .git(&["branch"])?
            .lines()
            .filter(|line| !line.is_empty())
            .map(Branch::parse)
            .collect();

        let graph_lines = runner
            .git(&[&format!(
                "log --graph --oneline --decorate --all -{GRAPH_LINE_CAP}"
            )])?
            .lines()
            .take(GRAPH_LINE_CAP)
            .map(String::from)
            .collect();

        let last_commit_message = runner.git(&["log -1 --pretty=%B"])?;

        Ok(RepoSnapshot {
            status_text,
            changes_size: diff.chars().count(),
            branches,
            graph_lines,
            last_commit_message,
        })
    }

    /// The checked-out branch, when the listing marks exactly one. A detached
    /// HEAD or an empty repository yields `None` without further fuss.
    pub fn current(&self) -> Option<&Branch> {
        self.branches.iter().find(|branch| branch.is_current)
    }
}
