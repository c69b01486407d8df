use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use board_core::ErrorBody;

use crate::store::StoreError;

/// Errori degli handler; ognuno diventa `{"error": ...}` con il suo status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request payload")]
    Validation,
    #[error("Incorrect username or password")]
    Unauthorized,
    // testo storico, mantenuto per compatibilità con i client esistenti
    #[error("Product not found")]
    NotFound,
    /// Body non leggibile (es. oltre il limite di dimensione), con lo status deciso da axum.
    #[error("{1}")]
    Body(StatusCode, String),
    /// Il messaggio dello storage arriva al client così com'è.
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Body(status, _) => *status,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Storage(msg) => ApiError::Storage(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(msg) = &self {
            tracing::error!("storage error: {}", msg);
        }
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
