use serde::{Deserialize, Serialize};

/// Corpo JSON di ogni risposta d'errore: `{"error": "<messaggio>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}
