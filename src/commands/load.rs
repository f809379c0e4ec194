use crate::core::{runner::CommandRunner, Result};

/// Fetches all remotes and prunes deleted remote branches.
pub fn execute_load(runner: &dyn CommandRunner) -> Result<()> {
    runner.git(&["fetch --all -p"])?;
    Ok(())
}
