pub mod http;

// Re-export comodi
pub use http::{CreateMessageRequest, UpdateMessageRequest};
