use rusqlite::{Connection, Result as SqlResult};
use std::path::Path;

pub const IN_MEMORY: &str = ":memory:";

/// Base database connection wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new<P: AsRef<Path>>(path: P) -> SqlResult<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> SqlResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Open a store from a connection string: `:memory:` or a file path.
    pub fn connect(connection_string: &str) -> SqlResult<Self> {
        if connection_string == IN_MEMORY {
            Self::in_memory()
        } else {
            Self::new(connection_string)
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
