use async_trait::async_trait;
use board_core::{new_message_id, now_timestamp, Message};
use time::Duration;
use tokio::sync::RwLock;

use super::{MessageStore, MessageUpdate, NewMessage, StoreError};

/// Store in memoria con la stessa semantica di quello Postgres.
/// Serve come fake iniettabile negli handler.
#[derive(Default)]
pub struct InMemoryStore {
    messages: RwLock<Vec<Message>>,
    failing: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store in cui ogni operazione fallisce con `StoreError::Storage`.
    pub fn failing() -> Self {
        Self { messages: RwLock::default(), failing: true }
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::Storage("storage unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl MessageStore for InMemoryStore {
    async fn create(&self, new: NewMessage) -> Result<Message, StoreError> {
        self.check()?;
        let mut messages = self.messages.write().await;
        // creation_time strettamente crescente anche per inserimenti nello stesso microsecondo
        let mut creation_time = now_timestamp();
        if let Some(last) = messages.iter().map(|m| m.creation_time).max() {
            if creation_time <= last {
                creation_time = last + Duration::microseconds(1);
            }
        }
        let message = Message {
            id: new_message_id(),
            name: new.name,
            email: new.email,
            text: new.text,
            creation_time,
        };
        messages.push(message.clone());
        Ok(message)
    }

    async fn get_by_id(&self, id: &str) -> Result<Message, StoreError> {
        self.check()?;
        self.messages
            .read()
            .await
            .iter()
            .find(|m| m.id.eq_ignore_ascii_case(id))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_by_id(&self, id: &str, update: MessageUpdate) -> Result<Message, StoreError> {
        self.check()?;
        let mut messages = self.messages.write().await;
        let message = messages
            .iter_mut()
            .find(|m| m.id.eq_ignore_ascii_case(id))
            .ok_or(StoreError::NotFound)?;
        message.text = update.text;
        Ok(message.clone())
    }

    async fn list_all(&self) -> Result<Vec<Message>, StoreError> {
        self.check()?;
        let mut all = self.messages.read().await.clone();
        all.sort_by(|a, b| b.creation_time.cmp(&a.creation_time));
        Ok(all)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.check()?;
        self.messages.write().await.clear();
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}
