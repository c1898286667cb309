use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::common::{ErrorBody, ErrorEnvelope};
use crate::storage::StoreError;

pub const STATUS_RETRIEVE_FAILED: &str = "failed to retrieve messages from the database";
pub const STATUS_SAVE_FAILED: &str = "failed to save the message to the database";

/// The single failure kind the API reports: every variant renders as HTTP 400
/// with an `{error, status}` envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to retrieve messages from the database: {0}")]
    Retrieve(#[source] StoreError),

    #[error("failed to save the message to the database: {0}")]
    Save(#[source] StoreError),

    #[error("failed to save the message to the database: unreadable body: {0}")]
    Body(String),
}

impl ApiError {
    pub fn status(&self) -> &'static str {
        match self {
            ApiError::Retrieve(_) => STATUS_RETRIEVE_FAILED,
            ApiError::Save(_) | ApiError::Body(_) => STATUS_SAVE_FAILED,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::Retrieve(err) | ApiError::Save(err) => ErrorBody {
                name: err.kind().to_string(),
                message: err.to_string(),
            },
            ApiError::Body(reason) => ErrorBody {
                name: "BodyError".to_string(),
                message: reason.clone(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{self}");
        let envelope = ErrorEnvelope {
            error: self.body(),
            status: self.status().to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(envelope)).into_response()
    }
}
