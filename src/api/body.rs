use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{Form, FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde_json::Value;

use super::error::ApiError;
use crate::storage::NewMessage;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Body of a save request.
///
/// JSON bodies are read only when sent as `application/json` and only if they
/// are objects; forms are read as url-encoded fields. Any other body counts as
/// empty, which gives a message with both fields absent.
#[derive(Debug)]
pub struct MessageInput(pub NewMessage);

#[async_trait]
impl<S> FromRequest<S> for MessageInput
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase())
            .unwrap_or_default();

        if content_type.starts_with(FORM_CONTENT_TYPE) {
            let Form(input) = Form::<NewMessage>::from_request(req, state)
                .await
                .map_err(|err| ApiError::Body(err.body_text()))?;
            return Ok(Self(input));
        }

        if !content_type.starts_with(JSON_CONTENT_TYPE) {
            return Ok(Self(NewMessage::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| ApiError::Body(err.body_text()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(NewMessage::default()));
        }

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|err| ApiError::Body(err.to_string()))?;
        from_json(&value).map(Self)
    }
}

/// Pick `name` and `message` out of a JSON object. Non-objects carry no fields.
fn from_json(value: &Value) -> Result<NewMessage, ApiError> {
    let Value::Object(fields) = value else {
        return Ok(NewMessage::default());
    };
    Ok(NewMessage {
        name: cast_to_string(fields.get("name"), "name")?,
        message: cast_to_string(fields.get("message"), "message")?,
    })
}

/// Scalars become their text form; objects and arrays cannot be cast.
fn cast_to_string(value: Option<&Value>, path: &str) -> Result<Option<String>, ApiError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(other) => Err(ApiError::Body(format!(
            "cast to string failed for value {other} at path \"{path}\""
        ))),
    }
}
