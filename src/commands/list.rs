use crate::core::{render, report::terminal_height, runner::CommandRunner, snapshot::RepoSnapshot, Result};

/// Captures a fresh snapshot and prints the bounded status report.
///
/// Every verb finishes here so the report always reflects post-mutation
/// state; the snapshot is rebuilt wholesale, never patched.
pub fn execute_list(runner: &dyn CommandRunner) -> Result<()> {
    let snapshot = RepoSnapshot::capture(runner)?;
    println!("{}", render(&snapshot, terminal_height()));
    Ok(())
}
