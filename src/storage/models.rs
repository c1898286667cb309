use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored message document.
///
/// `name` and `message` are whatever the writer sent; a missing field is kept
/// missing and left out of the serialized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Fields accepted by a write, before the store assigns id and timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewMessage {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl NewMessage {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            message: Some(message.into()),
        }
    }
}
