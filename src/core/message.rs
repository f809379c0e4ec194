//! Commit message decoration.
//!
//! A configured template carries two placeholder tokens: `#TASK` for the task
//! identifier and `#MSG` for the raw message. Decoration is pure string work;
//! it never touches the repository or the configuration store.

use crate::core::branch::Branch;

/// Placeholder for the formatted task identifier (`PROJECT-NUMBER`).
pub const TASK_TOKEN: &str = "#TASK";
/// Placeholder for the raw commit message.
pub const MSG_TOKEN: &str = "#MSG";
/// Pass-through default: no decoration.
pub const DEFAULT_FORMAT: &str = "#MSG";

/// A template counts as configured only when it carries both placeholders.
/// Anything else decorates as the identity function.
pub fn is_valid_template(template: &str) -> bool {
    template.contains(TASK_TOKEN) && template.contains(MSG_TOKEN)
}

/// Combines a raw message with the current branch's task identifier.
///
/// Returns the message unchanged when there is no current branch, the branch
/// name carries no task identifier, or the template is not configured.
/// Otherwise both placeholders are substituted in the template's own order.
pub fn decorate(raw_message: &str, current_branch: Option<&Branch>, template: &str) -> String {
    let task = match current_branch.and_then(Branch::task) {
        Some(task) => task,
        None => return raw_message.to_string(),
    };

    if !is_valid_template(template) {
        return raw_message.to_string();
    }

    template
        .replace(TASK_TOKEN, &task.to_string())
        .replace(MSG_TOKEN, raw_message)
}
