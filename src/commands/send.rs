use crate::core::{runner::CommandRunner, Result};

/// Publishes a ref to `origin`, defaulting to the current `HEAD`.
pub fn execute_send(runner: &dyn CommandRunner, noun: Option<&str>, force: bool) -> Result<()> {
    runner.git(&[&push_command(noun, force)])?;
    Ok(())
}

pub(crate) fn push_command(noun: Option<&str>, force: bool) -> String {
    let target = noun.unwrap_or("HEAD");
    let flag = if force { " -f" } else { "" };
    format!("push origin {target}{flag}")
}
