//! Child-process upstream with a deadline and an output ceiling

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, warn};

use crate::{CommandOutcome, Upstream};

/// Default ceiling on captured stdout and stderr (1 MiB each)
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{stream} exceeded {limit} bytes")]
    OutputTooLarge { stream: &'static str, limit: usize },

    #[error("Command failed: {command} ({status}): {stderr}")]
    NonZeroExit {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs the board CLI as a child process, without a shell
#[derive(Debug, Clone)]
pub struct CommandUpstream {
    program: String,
    home: Option<PathBuf>,
    max_output_bytes: usize,
}

impl CommandUpstream {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            home: None,
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
        }
    }

    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    pub fn with_max_output_bytes(mut self, limit: usize) -> Self {
        self.max_output_bytes = limit;
        self
    }

    fn command_line(&self, args: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    async fn execute(&self, args: &[String]) -> Result<String, ExecError> {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(home) = &self.home {
            command.env("HOME", home);
        }

        let mut child = command.spawn().map_err(|source| ExecError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let limit = self.max_output_bytes;

        // Either stream overflowing aborts both reads; the child is killed on drop
        let (stdout, stderr) = tokio::try_join!(
            read_capped(stdout, "stdout", limit),
            read_capped(stderr, "stderr", limit),
        )?;

        let status = child.wait().await?;
        if !status.success() {
            return Err(ExecError::NonZeroExit {
                command: self.command_line(args),
                status: status.to_string(),
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}

async fn read_capped<R>(
    reader: Option<R>,
    stream: &'static str,
    limit: usize,
) -> Result<Vec<u8>, ExecError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    if let Some(reader) = reader {
        reader
            .take(limit as u64 + 1)
            .read_to_end(&mut buf)
            .await?;
    }
    if buf.len() > limit {
        return Err(ExecError::OutputTooLarge { stream, limit });
    }
    Ok(buf)
}

#[async_trait]
impl Upstream for CommandUpstream {
    async fn run(&self, args: &[String], timeout: Duration) -> CommandOutcome {
        let command_line = self.command_line(args);
        debug!(command = %command_line, "running upstream command");

        match tokio::time::timeout(timeout, self.execute(args)).await {
            Ok(Ok(stdout)) => CommandOutcome::Ok(stdout),
            Ok(Err(e)) => {
                warn!(command = %command_line, error = %e, "upstream command failed");
                CommandOutcome::Failed(e.to_string())
            }
            Err(_) => {
                warn!(command = %command_line, ?timeout, "upstream command timed out");
                CommandOutcome::TimedOut(timeout)
            }
        }
    }

    fn describe(&self) -> String {
        self.program.clone()
    }
}
