use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::patterns::{BUILTIN_RULES, PatternRule};
use crate::{RedactError, Result};

/// Literal substituted for every matched secret
pub const REDACTION_MARKER: &str = "[REDACTED]";

/// How many times a single rule fired
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionInfo {
    pub rule: String,
    pub count: usize,
}

/// Redaction engine over an ordered rule set
#[derive(Debug, Clone)]
pub struct Redactor {
    rules: Vec<PatternRule>,
}

impl Redactor {
    /// Redactor with the built-in rule table
    pub fn new() -> Self {
        Self {
            rules: BUILTIN_RULES.clone(),
        }
    }

    /// Built-in rules followed by operator-supplied patterns.
    ///
    /// A pattern that fails to compile, or that matches the marker, is rejected.
    pub fn with_extra_patterns(patterns: &[String]) -> Result<Self> {
        let mut redactor = Self::new();
        for (index, pattern) in patterns.iter().enumerate() {
            let rule = PatternRule::new(format!("CUSTOM_{}", index + 1), pattern)?;
            if rule.regex.is_match(REDACTION_MARKER) {
                return Err(RedactError::MatchesMarker(pattern.clone()));
            }
            redactor.rules.push(rule);
        }
        Ok(redactor)
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Replace every secret in `text` with the marker
    pub fn apply(&self, text: &str) -> String {
        self.redact(text).0
    }

    /// Redact secrets from content, reporting which rules fired
    pub fn redact(&self, content: &str) -> (String, Vec<RedactionInfo>) {
        let mut result = content.to_string();
        let mut redactions = Vec::new();

        for rule in &self.rules {
            let count = rule.regex.find_iter(&result).count();
            if count > 0 {
                result = replace_all(&rule.regex, &result);
                redactions.push(RedactionInfo {
                    rule: rule.name.clone(),
                    count,
                });
            }
        }

        (result, redactions)
    }

    /// Same-shaped copy of `value` with every string leaf redacted
    pub fn redact_value(&self, value: &Value) -> Value {
        let mut count = 0;
        self.walk(value, &mut count)
    }

    /// Like [`Redactor::redact_value`], also returning the total number of replacements
    pub fn redact_value_counted(&self, value: &Value) -> (Value, usize) {
        let mut count = 0;
        let redacted = self.walk(value, &mut count);
        (redacted, count)
    }

    fn walk(&self, value: &Value, count: &mut usize) -> Value {
        match value {
            Value::String(text) => {
                let (redacted, info) = self.redact(text);
                *count += info.iter().map(|i| i.count).sum::<usize>();
                Value::String(redacted)
            }
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.walk(item, count)).collect())
            }
            Value::Object(fields) => {
                let mut out = Map::with_capacity(fields.len());
                for (key, field) in fields {
                    out.insert(key.clone(), self.walk(field, count));
                }
                Value::Object(out)
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
        }
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}

fn replace_all(regex: &Regex, text: &str) -> String {
    // NoExpand: the marker is a literal, never a capture-group template
    regex
        .replace_all(text, regex::NoExpand(REDACTION_MARKER))
        .into_owned()
}
