use crate::core::{runner::CommandRunner, Result};

/// Rebases the current branch onto a target, defaulting to `origin/main`.
pub fn execute_rebase(runner: &dyn CommandRunner, noun: Option<&str>, force: bool) -> Result<()> {
    let target = noun.unwrap_or("origin/main");
    let flag = if force { " -f" } else { "" };
    runner.git(&[&format!("rebase {target}{flag}")])?;
    Ok(())
}
