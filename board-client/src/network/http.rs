use reqwest::Client;

use super::error::ClientError;
use crate::common::{AboutUsContent, MessageDocument, MessageEnvelope, MessagesEnvelope, NewMessage};

/// Thin typed wrapper over the board's REST routes.
#[derive(Clone)]
pub struct BoardApi {
    http: Client,
    base_url: String,
}

impl BoardApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Any transport, status or decode failure comes back as an error.
    pub async fn fetch_about_us(&self) -> Result<AboutUsContent, ClientError> {
        let content = self
            .http
            .get(self.url("/about-us"))
            .send()
            .await?
            .error_for_status()?
            .json::<AboutUsContent>()
            .await?;
        Ok(content)
    }

    pub async fn fetch_messages(&self) -> Result<Vec<MessageDocument>, ClientError> {
        let envelope = self
            .http
            .get(self.url("/messages"))
            .send()
            .await?
            .error_for_status()?
            .json::<MessagesEnvelope>()
            .await?;
        Ok(envelope.messages)
    }

    pub async fn save_message(&self, new_message: &NewMessage) -> Result<MessageDocument, ClientError> {
        let envelope = self
            .http
            .post(self.url("/messages/save"))
            .json(new_message)
            .send()
            .await?
            .error_for_status()?
            .json::<MessageEnvelope>()
            .await?;
        Ok(envelope.message)
    }
}
