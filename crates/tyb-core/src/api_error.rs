//! Error taxonomy for the board API
//!
//! Every variant knows its HTTP status and its JSON body. The server crate
//! turns these into responses and runs the body through the redactor.

use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::TaskId;

/// Endpoints listed in the body of the catch-all 404
pub const AVAILABLE_ENDPOINTS: [&str; 4] = [
    "GET /api/board",
    "GET /api/task/:id",
    "GET /api/task/:id/output",
    "GET /health",
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Task ID must be a positive integer")]
    InvalidTaskId,

    /// The upstream command produced output that could not be parsed as a task.
    /// This also covers a task that does not exist; the two cases are indistinguishable.
    #[error("{message}")]
    TaskNotFound { task_id: TaskId, message: String },

    #[error("{message}")]
    Upstream {
        error: String,
        message: String,
        task_id: Option<TaskId>,
    },

    #[error("Endpoint {method} {path} does not exist")]
    NotFound { method: String, path: String },

    #[error("{0}")]
    Internal(String),
}

impl From<crate::Error> for ApiError {
    fn from(err: crate::Error) -> Self {
        match err {
            crate::Error::InvalidTaskId(_) => Self::InvalidTaskId,
            other => Self::Internal(other.to_string()),
        }
    }
}

impl ApiError {
    pub fn upstream(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Upstream {
            error: error.into(),
            message: message.into(),
            task_id: None,
        }
    }

    pub fn upstream_for_task(
        error: impl Into<String>,
        message: impl Into<String>,
        task_id: TaskId,
    ) -> Self {
        Self::Upstream {
            error: error.into(),
            message: message.into(),
            task_id: Some(task_id),
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidTaskId => 400,
            Self::TaskNotFound { .. } | Self::NotFound { .. } => 404,
            Self::Upstream { .. } | Self::Internal(_) => 500,
        }
    }

    /// Short error label used as the `error` field
    pub fn label(&self) -> &str {
        match self {
            Self::InvalidTaskId => "Invalid task ID",
            Self::TaskNotFound { .. } => "Task not found or invalid response",
            Self::Upstream { error, .. } => error,
            Self::NotFound { .. } => "Not found",
            Self::Internal(_) => "Internal server error",
        }
    }

    /// JSON body, before redaction
    pub fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("error".into(), Value::String(self.label().to_string()));
        body.insert("message".into(), Value::String(self.to_string()));

        match self {
            Self::TaskNotFound { task_id, .. } => {
                body.insert("task_id".into(), json!(task_id));
            }
            Self::Upstream {
                task_id: Some(task_id),
                ..
            } => {
                body.insert("task_id".into(), json!(task_id));
            }
            Self::NotFound { .. } => {
                body.insert("available_endpoints".into(), json!(AVAILABLE_ENDPOINTS));
            }
            Self::InvalidTaskId | Self::Upstream { task_id: None, .. } | Self::Internal(_) => {}
        }

        Value::Object(body)
    }
}
