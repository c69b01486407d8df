use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Post del message board, così come viene persistito e restituito sul wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// UUID generato dallo store, immutabile.
    pub id: String,
    pub name: String,
    pub email: String,
    pub text: String,
    /// Assegnato dallo store alla creazione (RFC3339 sul wire).
    #[serde(with = "time::serde::rfc3339")]
    pub creation_time: OffsetDateTime,
}
