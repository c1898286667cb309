use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message document as the server returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /messages/save`.
#[derive(Debug, Clone, Serialize)]
pub struct NewMessage {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessagesEnvelope {
    pub messages: Vec<MessageDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageEnvelope {
    pub message: MessageDocument,
}

/// Content served by `GET /about-us`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AboutUsContent {
    pub title: String,
    pub content: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}
