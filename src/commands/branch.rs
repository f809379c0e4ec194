use crate::core::{runner::CommandRunner, Result};

/// Renames the current branch.
pub fn execute_rename(runner: &dyn CommandRunner, noun: Option<&str>) -> Result<()> {
    runner.git(&[&format!("branch -m {}", noun.unwrap_or("main"))])?;
    Ok(())
}

/// Creates a branch and switches to it.
pub fn execute_create(runner: &dyn CommandRunner, noun: Option<&str>) -> Result<()> {
    runner.git(&[&format!("checkout -b {}", noun.unwrap_or("main"))])?;
    Ok(())
}

/// Switches to an existing branch.
pub fn execute_switch(runner: &dyn CommandRunner, noun: Option<&str>) -> Result<()> {
    runner.git(&[&format!("checkout {}", noun.unwrap_or("main"))])?;
    Ok(())
}
