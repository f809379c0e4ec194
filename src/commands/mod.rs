//! Verb handlers and the verb→handler dispatch table.
//!
//! Every invocation follows the same shape: resolve the verb against the
//! closed set, probe the repository (the snapshot capture doubles as the
//! "is this even a repository" check), apply the requested mutation, then
//! re-capture and print the status report. An unknown verb is rejected
//! before anything touches the external tool.

pub mod branch;
pub mod format;
pub mod list;
pub mod load;
pub mod merge;
pub mod rebase;
pub mod record;
pub mod reset;
pub mod send;

pub use branch::*;
pub use format::*;
pub use list::*;
pub use load::*;
pub use merge::*;
pub use rebase::*;
pub use record::*;
pub use reset::*;
pub use send::*;

use crate::core::{
    config::MessageFormatStore,
    error::{GitShorthandError, Result},
    runner::CommandRunner,
    snapshot::RepoSnapshot,
};

/// The closed set of recognized verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    List,
    Load,
    Send,
    Rec,
    Edit,
    Mov,
    Name,
    Mkbr,
    Chbr,
    Set,
    Noff,
    Fmt,
}

impl Verb {
    /// Resolves the raw verb token. Fails with `UnknownVerb` before any
    /// external tool call can happen.
    fn resolve(verb: Option<&str>) -> Result<Self> {
        Ok(match verb {
            None | Some("list") => Verb::List,
            Some("load") => Verb::Load,
            Some("send") => Verb::Send,
            Some("rec") => Verb::Rec,
            Some("edit") => Verb::Edit,
            Some("mov") => Verb::Mov,
            Some("name") => Verb::Name,
            Some("mkbr") => Verb::Mkbr,
            Some("chbr") | Some("sel") => Verb::Chbr,
            Some("set") => Verb::Set,
            Some("noff") => Verb::Noff,
            Some("fmt") => Verb::Fmt,
            Some(other) => {
                return Err(GitShorthandError::UnknownVerb {
                    verb: other.to_string(),
                })
            }
        })
    }
}

/// Maps a verb to its handler and finishes with the status report.
///
/// The pre-mutation snapshot supplies current-branch context to `rec`/`edit`;
/// the report at the end is rendered from a fresh one.
pub fn dispatch(
    runner: &dyn CommandRunner,
    store: &mut dyn MessageFormatStore,
    verb: Option<&str>,
    noun: Option<&str>,
    force: bool,
    sending: bool,
) -> Result<()> {
    let verb = Verb::resolve(verb)?;
    let snapshot = RepoSnapshot::capture(runner)?;

    match verb {
        Verb::List => {}
        Verb::Load => execute_load(runner)?,
        Verb::Send => execute_send(runner, noun, force)?,
        Verb::Rec => {
            execute_record(runner, store, &snapshot, noun, RecordMode::Commit, force, sending)?
        }
        Verb::Edit => {
            execute_record(runner, store, &snapshot, noun, RecordMode::Amend, force, sending)?
        }
        Verb::Mov => execute_rebase(runner, noun, force)?,
        Verb::Name => execute_rename(runner, noun)?,
        Verb::Mkbr => execute_create(runner, noun)?,
        Verb::Chbr => execute_switch(runner, noun)?,
        Verb::Set => execute_reset(runner, noun)?,
        Verb::Noff => execute_merge(runner, noun)?,
        Verb::Fmt => execute_format(store, noun)?,
    }

    execute_list(runner)
}
