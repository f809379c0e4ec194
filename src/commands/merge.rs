use crate::core::{runner::CommandRunner, Result};

/// Merges a branch into the current one without fast-forwarding.
pub fn execute_merge(runner: &dyn CommandRunner, noun: Option<&str>) -> Result<()> {
    runner.git(&[&format!(
        "merge --no-ff --no-edit {}",
        noun.unwrap_or("main")
    )])?;
    Ok(())
}
