//! External tool invocation through a single narrow interface.
//!
//! Every git call in the application funnels through [`CommandRunner`] so that
//! tests can substitute a scripted fake without a real git installation. The
//! production implementation, [`ShellRunner`], hands the command line to
//! `sh -c`, captures combined stdout/stderr, and enforces a per-call timeout.
//!
//! # Public API
//! - [`CommandRunner`]: Trait for executing one command line
//! - [`ShellRunner`]: Production runner backed by `sh -c`
//! - [`shell_quote`]: Double-quote a value for safe embedding in a command line

use crate::core::error::{GitShorthandError, Result};
use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Default per-call timeout. A hung git call (e.g. a credential prompt on a
/// misconfigured remote) kills the whole invocation otherwise.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Narrow interface to the external tool.
///
/// `run` executes one shell command line and returns combined stdout/stderr
/// with trailing newlines stripped; a non-zero exit status surfaces the
/// captured text as the error payload.
pub trait CommandRunner {
    fn run(&self, command_line: &str) -> Result<String>;

    /// Run one or more git sub-commands, joined with `&&` so a later step
    /// only executes when the earlier one succeeded.
    fn git(&self, subcommands: &[&str]) -> Result<String> {
        let line = subcommands
            .iter()
            .map(|sub| format!("git {sub}"))
            .collect::<Vec<_>>()
            .join(" && ");
        self.run(&line)
    }
}

/// Production runner: blocking `sh -c` with combined output capture.
pub struct ShellRunner {
    timeout: Duration,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command_line: &str) -> Result<String> {
        log::debug!("running: {command_line}");

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Both pipes are drained off-thread while we wait. A child that
        // fills an unread pipe buffer blocks on write and never exits.
        let stdout_drain = spawn_drain(child.stdout.take());
        let stderr_drain = spawn_drain(child.stderr.take());

        let status = match wait_with_timeout(&mut child, self.timeout)? {
            Some(status) => status,
            None => {
                log::warn!("killing timed-out command: {command_line}");
                let _ = child.kill();
                let _ = child.wait();
                // Killing the child closed the pipes; the drains finish now.
                let _ = stdout_drain.join();
                let _ = stderr_drain.join();
                return Err(GitShorthandError::ToolTimeout {
                    command: command_line.to_string(),
                });
            }
        };

        let mut buf = stdout_drain.join().unwrap_or_default();
        buf.extend(stderr_drain.join().unwrap_or_default());

        let text = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\n', '\r'])
            .to_string();
        log::debug!("exit status {status}, {} bytes of output", text.len());

        if status.success() {
            Ok(text)
        } else {
            Err(GitShorthandError::ToolInvocation { output: text })
        }
    }
}

/// Polls the child until it exits or the timeout elapses. Returns `None` on
/// timeout; the caller is responsible for killing the child.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Result<Option<ExitStatus>> {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(25);

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if start.elapsed() >= timeout {
            return Ok(None);
        }
        thread::sleep(poll_interval);
    }
}

/// Reads one pipe to the end on its own thread. The read only finishes when
/// the child exits or is killed, so the handle must be joined after that.
fn spawn_drain<R: Read + Send + 'static>(source: Option<R>) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut source) = source {
            let _ = source.read_to_end(&mut buf);
        }
        buf
    })
}

/// Wraps a value in double quotes, escaping the characters the shell still
/// interprets inside them. Used for embedding commit messages in a command
/// line such as `git commit -m "..."`.
pub fn shell_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if matches!(ch, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}
