use std::time::Duration;

/// Result of a single bounded command run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Exit status zero; captured stdout
    Ok(String),
    /// The deadline passed and the child was killed
    TimedOut(Duration),
    /// Spawn error, non-zero exit or output overflow
    Failed(String),
}

impl CommandOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Collapse into stdout or a failure message
    pub fn into_result(self) -> Result<String, String> {
        match self {
            Self::Ok(stdout) => Ok(stdout),
            Self::TimedOut(after) => Err(format!(
                "Command timed out after {}ms",
                after.as_millis()
            )),
            Self::Failed(message) => Err(message),
        }
    }
}
