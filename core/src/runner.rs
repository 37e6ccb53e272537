use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RunnerError {
    /// The program could not be started at all.
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The program ran and exited unsuccessfully. Carries the captured
    /// stderr when there was any, otherwise the exit-status description.
    #[error("{0}")]
    Failed(String),
    /// I/O towards the child failed mid-run.
    #[error("i/o error while running '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The program outlived the configured time budget and was killed.
    #[error("'{program}' did not finish within {limit:?}")]
    TimedOut { program: String, limit: Duration },
}

/// Seam for invoking the external bridge tool, so flows can run against a
/// recording fake in tests.
#[async_trait]
pub trait CommandRunner {
    /// Runs `program` with `args`, optionally feeding one line on stdin.
    /// Resolves with the raw captured stdout, untrimmed.
    async fn run(
        &self,
        program: &str,
        args: &[String],
        stdin_line: Option<&str>,
    ) -> Result<String, RunnerError>;
}

/// Spawns exactly one OS process per call and captures its output.
///
/// Without a timeout the call waits for as long as the child does; a hung
/// tool hangs the flow. With one, expiry kills the child and surfaces
/// [`RunnerError::TimedOut`].
pub struct ProcessRunner {
    timeout: Option<Duration>,
}

impl ProcessRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    async fn spawn_and_wait(
        &self,
        program: &str,
        args: &[String],
        stdin_line: Option<&str>,
    ) -> Result<String, RunnerError> {
        let mut command = Command::new(program);
        command
            .args(args)
            // Null stdin when there is nothing to feed, so a tool that reads
            // input never blocks on a pipe we would not write to.
            .stdin(if stdin_line.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = command.spawn().map_err(|source| RunnerError::Spawn {
            program: program.to_string(),
            source,
        })?;

        if let Some(line) = stdin_line {
            let mut stdin = child.stdin.take().ok_or_else(|| RunnerError::Io {
                program: program.to_string(),
                source: std::io::Error::other("child stdin was not piped"),
            })?;
            let payload = format!("{line}\n");
            stdin
                .write_all(payload.as_bytes())
                .await
                .map_err(|source| RunnerError::Io {
                    program: program.to_string(),
                    source,
                })?;
            // Closing the pipe right away tells the child not to wait for a
            // second line.
            drop(stdin);
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| RunnerError::Io {
                program: program.to_string(),
                source,
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            if stderr.is_empty() {
                Err(RunnerError::Failed(output.status.to_string()))
            } else {
                Err(RunnerError::Failed(stderr))
            }
        }
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        stdin_line: Option<&str>,
    ) -> Result<String, RunnerError> {
        debug!(program, ?args, feeds_stdin = stdin_line.is_some(), "running bridge command");
        match self.timeout {
            Some(limit) => {
                tokio::time::timeout(limit, self.spawn_and_wait(program, args, stdin_line))
                    .await
                    .map_err(|_| RunnerError::TimedOut {
                        program: program.to_string(),
                        limit,
                    })?
            }
            None => self.spawn_and_wait(program, args, stdin_line).await,
        }
    }
}
