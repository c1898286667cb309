pub mod api;
pub mod common;
pub mod config;
pub mod storage;

pub use api::{AppState, build_router};
pub use config::ServerConfig;
