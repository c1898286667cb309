pub mod types;

pub use types::{AboutUsContent, ErrorBody, ErrorEnvelope, MessageEnvelope, MessagesEnvelope};
