use axum::http::{HeaderValue, Method, request::Parts};
use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

lazy_static! {
    static ref LOCAL_ORIGIN: Regex =
        Regex::new(r"^http://(localhost|127\.0\.0\.1)(:[0-9]+)?$").expect("valid origin regex");
}

/// Explicit origin allow-list plus localhost for development
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    exact: Vec<String>,
}

impl OriginPolicy {
    pub fn new(origins: Vec<String>) -> Self {
        Self { exact: origins }
    }

    pub fn allows(&self, origin: &str) -> bool {
        self.exact.iter().any(|allowed| allowed == origin) || LOCAL_ORIGIN.is_match(origin)
    }

    /// GET-only CORS layer enforcing this policy
    pub fn layer(self) -> CorsLayer {
        let policy = Arc::new(self);
        CorsLayer::new()
            .allow_origin(AllowOrigin::predicate(
                move |origin: &HeaderValue, _parts: &Parts| {
                    origin
                        .to_str()
                        .map(|origin| policy.allows(origin))
                        .unwrap_or(false)
                },
            ))
            .allow_methods([Method::GET])
    }
}
