use axum::Json;
use axum::extract::{Path, State};

use super::AppState;
use super::body::MessageInput;
use super::error::ApiError;
use crate::common::{MessageEnvelope, MessagesEnvelope};

const SAVE_SEGMENT: &str = "save";

/// `GET /messages`
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<MessagesEnvelope>, ApiError> {
    let messages = state
        .with_store(|store| store.find_all())
        .map_err(ApiError::Retrieve)?;
    Ok(Json(MessagesEnvelope::ok(messages)))
}

/// `GET /messages/:messageId`
pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
) -> Result<Json<MessagesEnvelope>, ApiError> {
    find_by_id(&state, &message_id)
}

/// `GET /messages/save`: the static segment is looked up as an id like any
/// other, and fails as one.
pub async fn get_save_segment(
    State(state): State<AppState>,
) -> Result<Json<MessagesEnvelope>, ApiError> {
    find_by_id(&state, SAVE_SEGMENT)
}

fn find_by_id(state: &AppState, message_id: &str) -> Result<Json<MessagesEnvelope>, ApiError> {
    let messages = state
        .with_store(|store| store.find_by_id(message_id))
        .map_err(ApiError::Retrieve)?;
    Ok(Json(MessagesEnvelope::ok(messages)))
}

/// `POST /messages/save`
pub async fn save_message(
    State(state): State<AppState>,
    MessageInput(input): MessageInput,
) -> Result<Json<MessageEnvelope>, ApiError> {
    let message = state
        .with_store(|store| store.insert(input))
        .map_err(ApiError::Save)?;
    log::debug!("Saved message {}", message.id);
    Ok(Json(MessageEnvelope::ok(message)))
}
