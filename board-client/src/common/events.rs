use super::types::{AboutUsContent, MessageDocument};

/// Results the API worker sends back to the UI.
#[derive(Debug, Clone)]
pub enum ApiEvent {
    AboutUsLoaded { ticket: u64, content: AboutUsContent },
    AboutUsFailed { ticket: u64, reason: String },
    MessagesLoaded { ticket: u64, messages: Vec<MessageDocument> },
    MessagesFailed { ticket: u64, reason: String },
    MessageSaved(MessageDocument),
    SaveFailed(String),
}
