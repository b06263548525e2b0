pub mod cache;
pub mod cors;
pub mod handlers;
pub mod response;
pub mod server;

pub use cache::BoardCache;
pub use cors::OriginPolicy;
pub use server::{BoardServer, ServerOptions};
