use anyhow::{Context, Result};
use std::io::Read;
use tyb_config::Config;
use tyb_security::Redactor;

pub fn handle(config: &Config, json: bool) -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;

    let redactor = super::build_redactor(config)?;
    print!("{}", redact_input(&redactor, &input, json)?);
    Ok(())
}

fn redact_input(redactor: &Redactor, input: &str, json: bool) -> Result<String> {
    if json {
        let value: serde_json::Value =
            serde_json::from_str(input).context("Input is not valid JSON")?;
        let mut out = serde_json::to_string_pretty(&redactor.redact_value(&value))?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(redactor.apply(input))
    }
}
