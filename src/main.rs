use clap::Parser;
use git_shorthand::commands;
use git_shorthand::core::{print_error, FileFormatStore, Result, ShellRunner};
use std::env;

#[derive(Parser)]
#[command(name = "git-shorthand")]
#[command(about = "Short-verb shorthand layer over the git CLI")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verb selecting the operation: load, send, rec, edit, mov, name,
    /// mkbr, chbr/sel, set, noff, fmt, list (default: list)
    verb: Option<String>,

    /// Optional target: branch name, ref, commit message, or format
    /// template depending on the verb
    noun: Option<String>,

    /// Force the underlying git operation (push -f / rebase -f)
    #[arg(short, long)]
    force: bool,

    /// After rec/edit, chain a publish of the current branch
    #[arg(short, long)]
    sending: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let runner = ShellRunner::new();
    let mut store = match FileFormatStore::open() {
        Ok(store) => store,
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = commands::dispatch(
        &runner,
        &mut store,
        cli.verb.as_deref(),
        cli.noun.as_deref(),
        cli.force,
        cli.sending,
    ) {
        if e.is_not_a_repository() {
            print_error("Not a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }

    Ok(())
}
