//! Default `CommandRunner` implementation.
//!
//! Spawns external diagnostic tools via tokio, merges stderr into the
//! captured text, and bounds every invocation with a caller-supplied
//! timeout so a hung tool cannot block the whole report.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tokio::time;
use tracing::debug;

use ohmygpu_core::ports::CommandRunner;

/// Why a command produced nothing. Internal vocabulary only: the port
/// contract collapses all of these to `None` after logging.
#[derive(Debug, Error)]
enum RunError {
    #[error("failed to run: {0}")]
    Io(#[from] std::io::Error),
    #[error("timed out after {0:?}")]
    TimedOut(Duration),
    #[error("produced no output")]
    NoOutput,
}

/// Command runner backed by `tokio::process`.
///
/// Commands run strictly one at a time from the caller's perspective;
/// each is fully drained and waited on before the next probe fires.
pub struct ShellCommandRunner {
    timeout: Duration,
}

impl ShellCommandRunner {
    /// Create a runner that gives each command at most `timeout` to
    /// finish. On expiry the child is killed and the probe sees no data.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn capture(&self, program: &str, args: &[&str]) -> Result<String, RunError> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        // Dropping the output future on timeout kills the child
        // (kill_on_drop), releasing its pipes.
        let output = time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| RunError::TimedOut(self.timeout))??;

        // Merge stderr into the captured text; several probed tools print
        // useful output there or exit non-zero while still printing
        // something parseable, so exit status is deliberately ignored.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if text.trim().is_empty() {
            return Err(RunError::NoOutput);
        }

        Ok(text)
    }
}

#[async_trait]
impl CommandRunner for ShellCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Option<String> {
        match self.capture(program, args).await {
            Ok(text) => Some(text),
            Err(err) => {
                debug!("{program}: {err}");
                None
            }
        }
    }
}
