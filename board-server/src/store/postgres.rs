use async_trait::async_trait;
use board_core::Message;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use super::{MessageStore, MessageUpdate, NewMessage, StoreError};

const COLUMNS: &str = "id, name, email, text, creation_time";

#[derive(FromRow, Debug)]
struct MessageRow {
    id: Uuid,
    name: String,
    email: String,
    text: String,
    creation_time: OffsetDateTime,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Message {
            id: row.id.to_string(),
            name: row.name,
            email: row.email,
            text: row.text,
            creation_time: row.creation_time,
        }
    }
}

// Un id che non è un UUID non può corrispondere a nessuna riga.
fn parse_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::NotFound)
}

/// Store su Postgres: tabella `messages` creata da [`crate::ensure_schema`].
#[derive(Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn create(&self, new: NewMessage) -> Result<Message, StoreError> {
        let row: MessageRow = sqlx::query_as(&format!(
            "INSERT INTO messages (name, email, text) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        ))
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.text)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn get_by_id(&self, id: &str) -> Result<Message, StoreError> {
        let id = parse_id(id)?;
        let row: MessageRow =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM messages WHERE id = $1"))
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(row.into())
    }

    async fn update_by_id(&self, id: &str, update: MessageUpdate) -> Result<Message, StoreError> {
        let id = parse_id(id)?;
        // RETURNING senza righe = nessun messaggio con quell'id
        let row: Option<MessageRow> = sqlx::query_as(&format!(
            "UPDATE messages SET text = $1 WHERE id = $2 RETURNING {COLUMNS}"
        ))
        .bind(&update.text)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Message::from).ok_or(StoreError::NotFound)
    }

    async fn list_all(&self) -> Result<Vec<Message>, StoreError> {
        let rows: Vec<MessageRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM messages ORDER BY creation_time DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM messages").execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.pool.acquire().await?;
        Ok(())
    }
}
