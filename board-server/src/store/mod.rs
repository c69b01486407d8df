//! Persistenza dei messaggi.
//!
//! Gli handler parlano solo con il trait [`MessageStore`]; in produzione c'è
//! [`PgMessageStore`], nei test [`InMemoryStore`].

use async_trait::async_trait;
use board_core::Message;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgMessageStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("message not found")]
    NotFound,
    #[error("{0}")]
    Storage(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Storage(other.to_string()),
        }
    }
}

/// Campi forniti dal client alla creazione; id e creation_time li assegna lo store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub text: String,
}

/// Campi modificabili da un update. Solo text: name ed email restano quelli della creazione.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageUpdate {
    pub text: String,
}

#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn create(&self, new: NewMessage) -> Result<Message, StoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Message, StoreError>;

    /// Aggiorna il messaggio e restituisce la riga risultante.
    /// Un id senza riga corrispondente è `NotFound`, mai un successo vuoto.
    async fn update_by_id(&self, id: &str, update: MessageUpdate) -> Result<Message, StoreError>;

    /// Tutti i messaggi, dal più recente al più vecchio.
    async fn list_all(&self) -> Result<Vec<Message>, StoreError>;

    /// Cancella tutte le righe. Non esposto via HTTP.
    async fn clear(&self) -> Result<(), StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
