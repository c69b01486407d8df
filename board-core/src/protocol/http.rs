use serde::{Deserialize, Serialize};

/*
    DTO per i corpi delle richieste HTTP.
    I campi assenti diventano stringhe vuote, così "mancante" e "vuoto"
    vengono rifiutati dalla stessa validazione.
*/

// POST /messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub text: String,
}

impl CreateMessageRequest {
    /// Vero solo se name, email e text sono tutti non vuoti.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.text.is_empty()
    }
}

// PUT /messages/{id}: solo text è modificabile, eventuali altri campi vengono ignorati
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMessageRequest {
    #[serde(default)]
    pub text: String,
}

impl UpdateMessageRequest {
    pub fn is_complete(&self) -> bool {
        !self.text.is_empty()
    }
}
