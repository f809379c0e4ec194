use crate::commands::send::push_command;
use crate::core::{
    config::MessageFormatStore,
    message::decorate,
    runner::{shell_quote, CommandRunner},
    snapshot::RepoSnapshot,
    Result,
};

/// Whether to create a new commit or amend the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordMode {
    Commit,
    Amend,
}

/// Stages everything and commits with a decorated message.
///
/// The message defaults to `WIP` for a fresh commit and to the last commit's
/// own message when amending. With `sending`, a publish of the current branch
/// is chained after the commit (forced iff `force`).
pub fn execute_record(
    runner: &dyn CommandRunner,
    store: &dyn MessageFormatStore,
    snapshot: &RepoSnapshot,
    noun: Option<&str>,
    mode: RecordMode,
    force: bool,
    sending: bool,
) -> Result<()> {
    let raw = match (noun, mode) {
        (Some(message), _) => message.to_string(),
        (None, RecordMode::Amend) => snapshot.last_commit_message.clone(),
        (None, RecordMode::Commit) => "WIP".to_string(),
    };

    let message = decorate(&raw, snapshot.current(), &store.format());

    let amend_flag = match mode {
        RecordMode::Commit => "",
        RecordMode::Amend => "--amend ",
    };
    let commit = format!("commit {amend_flag}-m {}", shell_quote(&message));
    runner.git(&["add .", &commit])?;

    if sending {
        runner.git(&[&push_command(None, force)])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::branch::Branch;
    use std::cell::RefCell;

    struct Recorder(RefCell<Vec<String>>);
    impl CommandRunner for Recorder {
        fn run(&self, command_line: &str) -> Result<String> {
            self.0.borrow_mut().push(command_line.to_string());
            Ok(String::new())
        }
    }

    struct FixedStore(Option<String>);
    impl MessageFormatStore for FixedStore {
        fn get(&self) -> Option<String> {
            self.0.clone()
        }
        fn set(&mut self, _value: &str) -> Result<()> {
            Ok(())
        }
    }

    fn snapshot_on(branch_line: &str, last: &str) -> RepoSnapshot {
        RepoSnapshot {
            status_text: "On branch x".to_string(),
            changes_size: 0,
            branches: vec![Branch::parse(branch_line)],
            graph_lines: Vec::new(),
            last_commit_message: last.to_string(),
        }
    }

    #[test]
    fn test_rec_decorates_message_on_task_branch() -> Result<()> {
        let recorder = Recorder(RefCell::new(Vec::new()));
        let store = FixedStore(Some("[#TASK] #MSG".to_string()));
        let snapshot = snapshot_on("* AB-12-foo", "old");

        execute_record(
            &recorder,
            &store,
            &snapshot,
            Some("fix bug"),
            RecordMode::Commit,
            false,
            false,
        )?;

        assert_eq!(
            recorder.0.borrow().as_slice(),
            ["git add . && git commit -m \"[AB-12] fix bug\""]
        );
        Ok(())
    }

    #[test]
    fn test_rec_defaults_to_wip_without_message() -> Result<()> {
        let recorder = Recorder(RefCell::new(Vec::new()));
        let store = FixedStore(None);
        let snapshot = snapshot_on("* main", "old");

        execute_record(
            &recorder,
            &store,
            &snapshot,
            None,
            RecordMode::Commit,
            false,
            false,
        )?;

        assert_eq!(
            recorder.0.borrow().as_slice(),
            ["git add . && git commit -m \"WIP\""]
        );
        Ok(())
    }

    #[test]
    fn test_edit_amends_with_last_message() -> Result<()> {
        let recorder = Recorder(RefCell::new(Vec::new()));
        let store = FixedStore(None);
        let snapshot = snapshot_on("* main", "previous message");

        execute_record(
            &recorder,
            &store,
            &snapshot,
            None,
            RecordMode::Amend,
            false,
            false,
        )?;

        assert_eq!(
            recorder.0.borrow().as_slice(),
            ["git add . && git commit --amend -m \"previous message\""]
        );
        Ok(())
    }

    #[test]
    fn test_sending_chains_a_push() -> Result<()> {
        let recorder = Recorder(RefCell::new(Vec::new()));
        let store = FixedStore(None);
        let snapshot = snapshot_on("* main", "old");

        execute_record(
            &recorder,
            &store,
            &snapshot,
            Some("done"),
            RecordMode::Commit,
            true,
            true,
        )?;

        let calls = recorder.0.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], "git push origin HEAD -f");
        Ok(())
    }

    #[test]
    fn test_message_with_quotes_is_escaped() -> Result<()> {
        let recorder = Recorder(RefCell::new(Vec::new()));
        let store = FixedStore(None);
        let snapshot = snapshot_on("* main", "old");

        execute_record(
            &recorder,
            &store,
            &snapshot,
            Some("say \"hi\""),
            RecordMode::Commit,
            false,
            false,
        )?;

        assert_eq!(
            recorder.0.borrow().as_slice(),
            ["git add . && git commit -m \"say \\\"hi\\\"\""]
        );
        Ok(())
    }
}
