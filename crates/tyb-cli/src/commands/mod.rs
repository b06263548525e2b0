pub mod redact;
pub mod serve;

use anyhow::Result;
use tyb_config::Config;
use tyb_security::Redactor;

/// Built-in rules plus any configured extras
pub fn build_redactor(config: &Config) -> Result<Redactor> {
    Ok(Redactor::with_extra_patterns(
        &config.redaction.extra_patterns,
    )?)
}
