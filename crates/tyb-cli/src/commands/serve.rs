use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tyb_config::Config;
use tyb_server::{BoardServer, ServerOptions};
use tyb_upstream::CommandUpstream;

pub async fn handle(
    mut config: Config,
    host: Option<String>,
    port: Option<u16>,
    upstream: Option<String>,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(program) = upstream {
        config.upstream.program = program;
    }

    let redactor = super::build_redactor(&config)?;
    info!(rules = redactor.rules().len(), "redaction rules loaded");

    let upstream = CommandUpstream::new(config.upstream.program.clone())
        .with_home(config.upstream.home.clone())
        .with_max_output_bytes(config.upstream.max_output_bytes);

    info!(
        origins = ?config.server.cors_origins,
        "CORS enabled for listed origins and localhost"
    );

    let server = BoardServer::new(
        Arc::new(upstream),
        Arc::new(redactor),
        ServerOptions::from_config(&config),
    );
    server.serve(&config.server.host, config.server.port).await
}
