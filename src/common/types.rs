use serde::{Deserialize, Serialize};

use crate::storage::MessageDocument;

pub const STATUS_OK: &str = "all good";

/// Static "About Us" page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutUsContent {
    pub title: String,
    pub content: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// `{messages, status}` returned by the list and fetch-by-id routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesEnvelope {
    pub messages: Vec<MessageDocument>,
    pub status: String,
}

impl MessagesEnvelope {
    pub fn ok(messages: Vec<MessageDocument>) -> Self {
        Self {
            messages,
            status: STATUS_OK.to_string(),
        }
    }
}

/// `{message, status}` returned after a save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEnvelope {
    pub message: MessageDocument,
    pub status: String,
}

impl MessageEnvelope {
    pub fn ok(message: MessageDocument) -> Self {
        Self {
            message,
            status: STATUS_OK.to_string(),
        }
    }
}

/// The underlying failure carried inside an error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub name: String,
    pub message: String,
}

/// `{error, status}` returned with HTTP 400.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
    pub status: String,
}
