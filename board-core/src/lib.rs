//! board-core: tipi condivisi del message board (modello, DTO HTTP, corpo d'errore).
//! Niente I/O: il server e i test dipendono solo da questi tipi.

pub mod models;
pub mod protocol;
pub mod error;
pub mod utils;

// Re-export utili per ridurre i percorsi nel crate server
pub use error::ErrorBody;
pub use models::message::Message;
pub use protocol::http::{CreateMessageRequest, UpdateMessageRequest};
pub use utils::{new_message_id, now_timestamp};
