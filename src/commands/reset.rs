use crate::core::{runner::CommandRunner, Result};

/// Hard-resets the working tree to a target ref, defaulting to `main`.
pub fn execute_reset(runner: &dyn CommandRunner, noun: Option<&str>) -> Result<()> {
    runner.git(&[&format!("reset --hard {}", noun.unwrap_or("main"))])?;
    Ok(())
}
