use axum::{Router, routing::get};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::info;

use tyb_config::Config;
use tyb_core::AVAILABLE_ENDPOINTS;
use tyb_security::Redactor;
use tyb_upstream::{BoardCommand, Upstream};

use crate::cache::BoardCache;
use crate::cors::OriginPolicy;
use crate::handlers;

/// Timeouts, cache TTL and CORS origins
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub command_timeout: Duration,
    pub health_timeout: Duration,
    pub board_ttl: Duration,
    pub cors_origins: Vec<String>,
}

impl ServerOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            command_timeout: config.upstream.timeout(),
            health_timeout: config.upstream.health_timeout(),
            board_ttl: config.cache.board_ttl(),
            cors_origins: config.server.cors_origins.clone(),
        }
    }
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

pub struct BoardServer {
    pub upstream: Arc<dyn Upstream>,
    pub redactor: Arc<Redactor>,
    pub options: ServerOptions,
}

/// Shared by every request; the cache is created empty when the router is built
#[derive(Clone)]
pub(crate) struct AppState {
    pub upstream: Arc<dyn Upstream>,
    pub redactor: Arc<Redactor>,
    pub board_cache: Arc<RwLock<BoardCache>>,
    pub command_timeout: Duration,
    pub health_timeout: Duration,
    pub started_at: Instant,
}

impl AppState {
    /// Run a board query with the request timeout
    pub async fn query(&self, command: BoardCommand) -> Result<String, String> {
        self.upstream
            .run(&command.args(), self.command_timeout)
            .await
            .into_result()
    }
}

impl BoardServer {
    pub fn new(upstream: Arc<dyn Upstream>, redactor: Arc<Redactor>, options: ServerOptions) -> Self {
        Self {
            upstream,
            redactor,
            options,
        }
    }

    pub fn router(self) -> Router {
        let state = AppState {
            upstream: self.upstream,
            redactor: self.redactor,
            board_cache: Arc::new(RwLock::new(BoardCache::new(self.options.board_ttl))),
            command_timeout: self.options.command_timeout,
            health_timeout: self.options.health_timeout,
            started_at: Instant::now(),
        };

        let cors = OriginPolicy::new(self.options.cors_origins).layer();

        Router::new()
            .route("/api/board", get(handlers::board))
            .route("/api/task/:id", get(handlers::task_detail))
            .route("/api/task/:id/output", get(handlers::task_output))
            .route("/health", get(handlers::health))
            .fallback(handlers::not_found)
            .method_not_allowed_fallback(handlers::not_found)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    pub async fn serve(self, host: &str, port: u16) -> anyhow::Result<()> {
        let upstream = self.upstream.describe();
        let app = self.router();

        let addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&addr).await?;

        info!(%addr, %upstream, "board server listening");
        for endpoint in AVAILABLE_ENDPOINTS {
            info!("  {}", endpoint);
        }

        axum::serve(listener, app).await?;

        Ok(())
    }
}
