//! Core domain types for tyb
//!
//! This crate contains:
//! - Request parameters (task ids, output line counts) with lenient parsing
//! - The API error taxonomy shared by the server and its tests
//! - Timestamp helpers for response metadata

pub mod api_error;
pub mod error;
pub mod params;
pub mod timestamp;

pub use api_error::{ApiError, AVAILABLE_ENDPOINTS};
pub use error::{Error, Result};
pub use params::{OutputLines, TaskId};
pub use timestamp::now_rfc3339;
