use thiserror::Error;

pub type Result<T> = std::result::Result<T, RedactError>;

#[derive(Error, Debug)]
pub enum RedactError {
    #[error("Invalid redaction pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Redaction pattern {0:?} matches the redaction marker itself")]
    MatchesMarker(String),
}
