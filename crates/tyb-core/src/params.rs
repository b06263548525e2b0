//! Path and query parameters accepted by the board API

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Split `raw` into a sign and its leading run of ASCII digits.
///
/// `"12abc"` yields `(false, "12")`, `"  -7"` yields `(true, "7")`,
/// `"abc"` and `""` yield `None`.
fn leading_digits(raw: &str) -> Option<(bool, &str)> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    Some((negative, &digits[..end]))
}

/// Leading integer of `raw`. Values that do not fit in an `i64` yield `None`.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let (negative, digits) = leading_digits(raw)?;
    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Leading integer of `raw`, saturating at the `i64` bounds instead of failing.
fn parse_leading_int_saturating(raw: &str) -> Option<i64> {
    let (negative, digits) = leading_digits(raw)?;
    match digits.parse::<i64>() {
        Ok(value) => Some(if negative { -value } else { value }),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Positive task identifier understood by the upstream command
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(id: u64) -> Result<Self> {
        if id == 0 {
            return Err(Error::InvalidTaskId(id.to_string()));
        }
        Ok(Self(id))
    }

    /// Parse a path segment. Anything that does not start with a positive integer is rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        match parse_leading_int(raw) {
            Some(id) if id >= 1 => Ok(Self(id as u64)),
            _ => Err(Error::InvalidTaskId(raw.to_string())),
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of trailing output lines to request, always within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputLines(u32);

impl OutputLines {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;
    pub const DEFAULT: u32 = 20;

    /// Resolve the `lines` query parameter.
    ///
    /// Missing, unparseable and zero values fall back to the default;
    /// everything else is clamped into range, however large.
    pub fn from_query(raw: Option<&str>) -> Self {
        let requested = match raw.and_then(parse_leading_int_saturating) {
            None | Some(0) => i64::from(Self::DEFAULT),
            Some(n) => n,
        };
        let clamped = requested.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Self(clamped as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for OutputLines {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for OutputLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
