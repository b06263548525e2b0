//! Secret redaction engine
//!
//! A fixed table of credential-shaped patterns is applied to every string leaf
//! of a JSON value. Matches are replaced by [`REDACTION_MARKER`]; everything else,
//! including object keys and non-string leaves, is left untouched.

pub mod error;
pub mod patterns;
pub mod redactor;

pub use error::{RedactError, Result};
pub use patterns::{BUILTIN_PATTERNS, PatternRule};
pub use redactor::{REDACTION_MARKER, RedactionInfo, Redactor};
