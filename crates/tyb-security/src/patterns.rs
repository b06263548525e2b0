//! Built-in table of credential-shaped patterns
//!
//! Order matters: rules run top to bottom and a later rule sees the output of
//! the earlier ones. None of these may match the redaction marker.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{RedactError, Result};

/// (name, pattern) pairs, applied in this order
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    // AI vendor keys
    ("OPENAI_KEY", r"sk-[a-zA-Z0-9]{20,}"),
    ("ANTHROPIC_KEY", r"sk-ant-[a-zA-Z0-9-]{20,}"),
    ("OPENAI_PROJECT_KEY", r"sk-proj-[a-zA-Z0-9-]{20,}"),
    ("GOOGLE_API_KEY", r"AIza[a-zA-Z0-9_-]{35}"),
    ("XAI_KEY", r"xai-[a-zA-Z0-9]{20,}"),
    // AWS
    ("AWS_ACCESS_KEY", r"AKIA[A-Z0-9]{16}"),
    (
        "AWS_SECRET_KEY",
        r"(?i)aws_secret_access_key\s*[=:]\s*[a-zA-Z0-9/+=]{40}",
    ),
    // Bearer tokens
    ("BEARER_TOKEN", r"(?i)bearer\s+[a-zA-Z0-9._-]{20,}"),
    // Credential parameters in URLs and strings
    ("TOKEN_PARAM", r"(?i)token=[a-zA-Z0-9._-]{16,}"),
    ("API_KEY_PARAM", r"(?i)api_key=[a-zA-Z0-9._-]{16,}"),
    ("APIKEY_PARAM", r"(?i)apikey=[a-zA-Z0-9._-]{16,}"),
    ("ACCESS_TOKEN_PARAM", r"(?i)access_token=[a-zA-Z0-9._-]{16,}"),
    ("SECRET_PARAM", r"(?i)secret=[a-zA-Z0-9._-]{16,}"),
    // Passwords
    ("PASSWORD_PARAM", r#"(?i)password=[^\s&"']+"#),
    ("PASSWD_PARAM", r#"(?i)passwd=[^\s&"']+"#),
    ("PWD_PARAM", r#"(?i)pwd=[^\s&"']+"#),
    // Connection strings
    ("MONGODB_URL", r#"(?i)mongodb(\+srv)?://[^\s"']+"#),
    ("POSTGRES_URL", r#"(?i)postgres(ql)?://[^\s"']+"#),
    ("MYSQL_URL", r#"(?i)mysql://[^\s"']+"#),
    ("REDIS_URL", r#"(?i)redis://[^\s"']+"#),
    // Private key headers
    ("PRIVATE_KEY", r"-----BEGIN\s+(RSA\s+)?PRIVATE\s+KEY-----"),
    ("OPENSSH_PRIVATE_KEY", r"-----BEGIN\s+OPENSSH\s+PRIVATE\s+KEY-----"),
    // GitHub / GitLab
    ("GITHUB_PAT", r"ghp_[a-zA-Z0-9]{36}"),
    ("GITHUB_OAUTH", r"gho_[a-zA-Z0-9]{36}"),
    ("GITHUB_SERVER", r"ghs_[a-zA-Z0-9]{36}"),
    ("GITHUB_USER", r"ghu_[a-zA-Z0-9]{36}"),
    ("GITLAB_PAT", r"glpat-[a-zA-Z0-9_-]{20,}"),
    // npm
    ("NPM_TOKEN", r"npm_[a-zA-Z0-9]{36}"),
    // Stripe
    ("STRIPE_LIVE_SECRET", r"sk_live_[a-zA-Z0-9]{24,}"),
    ("STRIPE_TEST_SECRET", r"sk_test_[a-zA-Z0-9]{24,}"),
    ("STRIPE_LIVE_RESTRICTED", r"rk_live_[a-zA-Z0-9]{24,}"),
    ("STRIPE_TEST_RESTRICTED", r"rk_test_[a-zA-Z0-9]{24,}"),
    // Slack
    ("SLACK_TOKEN", r"xox[baprs]-[a-zA-Z0-9-]{10,}"),
    // Discord bot tokens
    (
        "DISCORD_TOKEN",
        r"[MN][A-Za-z0-9]{23,}\.[A-Za-z0-9_-]{6}\.[A-Za-z0-9_-]{27}",
    ),
    // Twilio
    ("TWILIO_KEY", r"SK[a-f0-9]{32}"),
    // SendGrid
    ("SENDGRID_KEY", r"SG\.[a-zA-Z0-9_-]{22}\.[a-zA-Z0-9_-]{43}"),
    // Shell exports of secret-looking variables
    (
        "SECRET_EXPORT",
        r"(?i)export\s+[A-Z_]*(?:KEY|TOKEN|SECRET|PASSWORD|CREDENTIAL|AUTH)[A-Z_]*=\S+",
    ),
    // JWTs
    (
        "JWT",
        r"eyJ[a-zA-Z0-9_-]{10,}\.eyJ[a-zA-Z0-9_-]{10,}\.[a-zA-Z0-9_-]{10,}",
    ),
    // UUID-shaped keys, only with context
    (
        "UUID_KEY",
        r"(?i)(?:api[_-]?key|apikey|secret|token)\s*[=:]\s*[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}",
    ),
];

/// A named, compiled matcher
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub name: String,
    pub regex: Regex,
}

impl PatternRule {
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| RedactError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.into(),
            regex,
        })
    }
}

lazy_static! {
    /// Compiled once per process, cloned into each redactor.
    pub(crate) static ref BUILTIN_RULES: Vec<PatternRule> = BUILTIN_PATTERNS
        .iter()
        .map(|(name, pattern)| {
            PatternRule::new(*name, pattern).expect("built-in redaction pattern must compile")
        })
        .collect();
}
