pub mod about;
pub mod body;
pub mod error;
pub mod messages;
pub mod middleware;

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;

use crate::storage::{MessageStore, StoreError, StoreResult};

pub use error::ApiError;

/// Shared handler state: the process-wide store handle.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<MessageStore>>,
    pub log_requests: bool,
}

impl AppState {
    pub fn new(store: MessageStore, log_requests: bool) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            log_requests,
        }
    }

    /// Run one store operation under the lock.
    pub fn with_store<T>(
        &self,
        op: impl FnOnce(&MessageStore) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let store = self.store.lock().map_err(|_| StoreError::Poisoned)?;
        op(&store)
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/messages", get(messages::list_messages))
        .route(
            "/messages/save",
            get(messages::get_save_segment).post(messages::save_message),
        )
        .route("/messages/:messageId", get(messages::get_message))
        .route("/about-us", get(about::about_us))
        .layer(from_fn(middleware::cors_middleware))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_log_middleware,
        ))
        .with_state(state)
}
