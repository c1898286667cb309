pub mod database;
pub mod error;
pub mod message_store;
pub mod models;

pub use error::{StoreError, StoreResult};
pub use message_store::MessageStore;
pub use models::{MessageDocument, NewMessage};

use std::fs;
use std::path::Path;

/// Ensure the directory holding a file-backed store exists
pub fn ensure_data_dir(connection_string: &str) -> std::io::Result<()> {
    if connection_string == database::IN_MEMORY {
        return Ok(());
    }
    if let Some(parent) = Path::new(connection_string).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
