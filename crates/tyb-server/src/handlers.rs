//! Route handlers
//!
//! Handlers compute a JSON body or an [`ApiError`] and hand it to
//! [`respond`]/[`respond_error`], which redact before serializing.

use axum::{
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::{Method, StatusCode, Uri},
    response::Response,
};
use serde_json::{Map, Value, json};
use std::time::Instant;
use tracing::warn;

use tyb_core::{ApiError, OutputLines, TaskId, now_rfc3339};
use tyb_upstream::BoardCommand;

use crate::response::{respond, respond_error};
use crate::server::AppState;

type IdParam = Result<Path<String>, PathRejection>;
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// A path segment axum could not decode is treated like any other bad id
fn raw_id(id: IdParam) -> Result<String, ApiError> {
    id.map(|Path(id)| id).map_err(|_| ApiError::InvalidTaskId)
}

/// Value of `name`; repeated keys are joined with commas, as a JS array stringifies
fn query_value(query: QueryPairs, name: &str) -> Option<String> {
    let Ok(Query(pairs)) = query else {
        return None;
    };
    let values: Vec<String> = pairs
        .into_iter()
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value)
        .collect();
    (!values.is_empty()).then(|| values.join(","))
}

/// Upstream JSON that is not an object is nested under `key` so metadata can be attached
fn into_object(value: Value, key: &str) -> Map<String, Value> {
    match value {
        Value::Object(fields) => fields,
        other => {
            let mut fields = Map::new();
            fields.insert(key.to_string(), other);
            fields
        }
    }
}

fn finish(state: &AppState, result: Result<Value, ApiError>) -> Response {
    match result {
        Ok(body) => respond(&state.redactor, StatusCode::OK, &body),
        Err(err) => {
            if err.status() >= 500 {
                warn!(error = %err.label(), "request failed");
            }
            respond_error(&state.redactor, &err)
        }
    }
}

/// GET /api/board - Current board snapshot, cached for the board TTL
pub(crate) async fn board(State(state): State<AppState>) -> Response {
    let result = load_board(&state).await;
    finish(&state, result)
}

async fn load_board(state: &AppState) -> Result<Value, ApiError> {
    if let Some(cached) = state.board_cache.read().await.get(Instant::now()) {
        return Ok(cached.clone());
    }

    let stdout = state
        .query(BoardCommand::Board)
        .await
        .map_err(|message| ApiError::upstream("Failed to fetch board data", message))?;

    let board: Value = serde_json::from_str(&stdout)
        .map_err(|e| ApiError::upstream("Failed to parse board data", e.to_string()))?;

    let mut body = into_object(board, "board");
    body.insert("updated_at".into(), Value::String(now_rfc3339()?));
    body.insert(
        "server_version".into(),
        Value::String(env!("CARGO_PKG_VERSION").to_string()),
    );

    // Cache the redacted form so a hit never holds raw upstream text
    let body = state.redactor.redact_value(&Value::Object(body));
    state
        .board_cache
        .write()
        .await
        .store(body.clone(), Instant::now());

    Ok(body)
}

/// GET /api/task/:id - Task details
pub(crate) async fn task_detail(
    State(state): State<AppState>,
    id: IdParam,
) -> Response {
    let result = match raw_id(id) {
        Ok(id) => load_task(&state, &id).await,
        Err(err) => Err(err),
    };
    finish(&state, result)
}

async fn load_task(state: &AppState, raw_id: &str) -> Result<Value, ApiError> {
    let task_id = TaskId::parse(raw_id)?;

    let stdout = state
        .query(BoardCommand::Show(task_id))
        .await
        .map_err(|message| {
            ApiError::upstream_for_task("Failed to fetch task details", message, task_id)
        })?;

    // Unparseable output is reported as a missing task; the CLI does not let us tell them apart
    let task: Value = serde_json::from_str(&stdout).map_err(|e| ApiError::TaskNotFound {
        task_id,
        message: e.to_string(),
    })?;

    let mut body = into_object(task, "task");
    body.insert("updated_at".into(), Value::String(now_rfc3339()?));
    Ok(Value::Object(body))
}

/// GET /api/task/:id/output - Last N lines of task output
pub(crate) async fn task_output(
    State(state): State<AppState>,
    id: IdParam,
    query: QueryPairs,
) -> Response {
    let lines = query_value(query, "lines");
    let result = match raw_id(id) {
        Ok(id) => load_output(&state, &id, lines.as_deref()).await,
        Err(err) => Err(err),
    };
    finish(&state, result)
}

async fn load_output(
    state: &AppState,
    raw_id: &str,
    raw_lines: Option<&str>,
) -> Result<Value, ApiError> {
    let task_id = TaskId::parse(raw_id)?;
    let lines = OutputLines::from_query(raw_lines);

    let output = state
        .query(BoardCommand::Output(task_id, lines))
        .await
        .map_err(|message| {
            ApiError::upstream_for_task("Failed to fetch task output", message, task_id)
        })?;

    Ok(json!({
        "task_id": task_id,
        "lines": lines,
        "output": output,
        "updated_at": now_rfc3339()?,
    }))
}

/// GET /health - Liveness, with an upstream `--version` probe
pub(crate) async fn health(State(state): State<AppState>) -> Response {
    let available = state
        .upstream
        .run(&BoardCommand::Version.args(), state.health_timeout)
        .await
        .is_ok();

    let result = now_rfc3339().map_err(ApiError::from).map(|timestamp| {
        json!({
            "status": if available { "healthy" } else { "degraded" },
            "timestamp": timestamp,
            "upstream_available": available,
            "uptime": state.started_at.elapsed().as_secs_f64(),
        })
    });
    finish(&state, result)
}

/// Anything not routed
pub(crate) async fn not_found(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let err = ApiError::NotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    };
    respond_error(&state.redactor, &err)
}
