use chrono::{SubsecRound, Utc};
use rusqlite::{Result as SqlResult, Row, params};
use uuid::Uuid;

use super::database::Database;
use super::error::{StoreError, StoreResult};
use super::models::{MessageDocument, NewMessage};

/// The `messages` collection.
pub struct MessageStore {
    db: Database,
}

impl MessageStore {
    /// Open the collection behind a connection string (`:memory:` or a file path)
    pub fn open(connection_string: &str) -> StoreResult<Self> {
        let db = Database::connect(connection_string)?;
        Self::with_database(db)
    }

    pub fn in_memory() -> StoreResult<Self> {
        Self::with_database(Database::in_memory()?)
    }

    fn with_database(db: Database) -> StoreResult<Self> {
        let store = Self { db };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> SqlResult<()> {
        let conn = self.db.connection();
        conn.execute(
            "CREATE TABLE IF NOT EXISTS messages (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                name TEXT,
                message TEXT,
                created_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Persist one document; the store assigns its id and creation time.
    pub fn insert(&self, new_message: NewMessage) -> StoreResult<MessageDocument> {
        let document = MessageDocument {
            id: Uuid::new_v4().simple().to_string(),
            name: new_message.name,
            message: new_message.message,
            created_at: Utc::now().trunc_subsecs(3),
        };

        self.db.connection().execute(
            "INSERT INTO messages (id, name, message, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                document.id,
                document.name,
                document.message,
                document.created_at
            ],
        )?;

        Ok(document)
    }

    /// Every document, in insertion order
    pub fn find_all(&self) -> StoreResult<Vec<MessageDocument>> {
        let conn = self.db.connection();
        let mut stmt =
            conn.prepare("SELECT id, name, message, created_at FROM messages ORDER BY seq ASC")?;

        let documents = stmt
            .query_map([], document_from_row)?
            .collect::<SqlResult<Vec<_>>>()?;

        Ok(documents)
    }

    /// Zero or one documents matching `id`.
    ///
    /// Ids that are not UUIDs are rejected before touching the table.
    pub fn find_by_id(&self, id: &str) -> StoreResult<Vec<MessageDocument>> {
        let key = Uuid::try_parse(id)
            .map_err(|_| StoreError::InvalidId(id.to_string()))?
            .simple()
            .to_string();

        let conn = self.db.connection();
        let mut stmt =
            conn.prepare("SELECT id, name, message, created_at FROM messages WHERE id = ?1")?;

        let documents = stmt
            .query_map(params![key], document_from_row)?
            .collect::<SqlResult<Vec<_>>>()?;

        Ok(documents)
    }

    pub fn count(&self) -> StoreResult<usize> {
        let count: i64 =
            self.db
                .connection()
                .query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn document_from_row(row: &Row<'_>) -> SqlResult<MessageDocument> {
    Ok(MessageDocument {
        id: row.get(0)?,
        name: row.get(1)?,
        message: row.get(2)?,
        created_at: row.get(3)?,
    })
}
