//! Bounded invocation of the external board CLI
//!
//! The server never sees exceptions or exit codes from the child process:
//! every run ends in a [`CommandOutcome`].

pub mod command;
pub mod outcome;
pub mod process;

pub use command::BoardCommand;
pub use outcome::CommandOutcome;
pub use process::{CommandUpstream, ExecError};

use async_trait::async_trait;
use std::time::Duration;

/// Something that can answer board queries by running a command
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Run with `args`, giving up after `timeout`
    async fn run(&self, args: &[String], timeout: Duration) -> CommandOutcome;

    /// Human-readable program name for logs
    fn describe(&self) -> String;
}
