use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::{request::Parts, HeaderMap, StatusCode};
use axum::{Extension, Json};
use board_core::{CreateMessageRequest, Message, UpdateMessageRequest};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::auth::authenticate;
use crate::error::ApiError;
use crate::store::{MessageUpdate, NewMessage};
use crate::{health_with_store, AppState};

pub const HOME_TEXT: &str = "Please refer to README.md in the repository for API documentation";

/// Id di messaggio preso dal path. Accetta solo cifre esadecimali e trattini:
/// qualsiasi altra forma risponde come una rotta inesistente (404, body vuoto).
#[derive(Debug, Clone)]
pub struct MessageId(pub String);

pub fn is_message_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for MessageId {
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;
        if is_message_id(&id) {
            Ok(MessageId(id))
        } else {
            Err(StatusCode::NOT_FOUND)
        }
    }
}

fn require_auth(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    if authenticate(headers, state.verifier.as_ref()) {
        Ok(())
    } else {
        tracing::debug!("rejected request with missing or wrong credentials");
        Err(ApiError::Unauthorized)
    }
}

/// Dimensione massima del body accettata da POST e PUT.
pub const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/*
    Il body viene decodificato come JSON qualunque sia il Content-Type.
    Si legge solo il primo valore (eventuali dati dopo vengono ignorati) e le chiavi
    dell'oggetto valgono senza distinzione di maiuscole: "Name" equivale a "name".
*/
fn decode<T: DeserializeOwned>(body: Result<Bytes, BytesRejection>) -> Result<T, ApiError> {
    let body = body.map_err(|rejection| ApiError::Body(rejection.status(), rejection.body_text()))?;
    let value = serde_json::Deserializer::from_slice(&body)
        .into_iter::<Value>()
        .next()
        .ok_or(ApiError::Validation)?
        .map_err(|_| ApiError::Validation)?;
    let value = match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, v)| (key.to_lowercase(), v))
                .collect(),
        ),
        other => other,
    };
    serde_json::from_value(value).map_err(|_| ApiError::Validation)
}

/// Handler per GET /messages
pub async fn list_messages(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Message>>, ApiError> {
    require_auth(&state, &headers)?;
    let messages = state.store.list_all().await?;
    Ok(Json(messages))
}

/// Handler per GET /messages/{id}
pub async fn get_message(
    MessageId(id): MessageId,
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Message>, ApiError> {
    require_auth(&state, &headers)?;
    let message = state.store.get_by_id(&id).await?;
    Ok(Json(message))
}

/// Handler per POST /messages. Pubblico: chiunque può scrivere sulla bacheca.
pub async fn create_message(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let req: CreateMessageRequest = decode(body)?;
    if !req.is_complete() {
        return Err(ApiError::Validation);
    }
    let new = NewMessage { name: req.name, email: req.email, text: req.text };
    let message = state.store.create(new).await?;
    tracing::info!("created message {}", message.id);
    Ok((StatusCode::CREATED, Json(message)))
}

/// Handler per PUT /messages/{id}. L'id arriva dal path, mai dal body.
pub async fn update_message(
    MessageId(id): MessageId,
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Message>, ApiError> {
    require_auth(&state, &headers)?;
    let req: UpdateMessageRequest = decode(body)?;
    if !req.is_complete() {
        return Err(ApiError::Validation);
    }
    let message = state.store.update_by_id(&id, MessageUpdate { text: req.text }).await?;
    tracing::info!("updated message {}", message.id);
    Ok(Json(message))
}

/// Handler per GET /
pub async fn home() -> &'static str {
    HOME_TEXT
}

/// Handler per GET /health
pub async fn health(Extension(state): Extension<Arc<AppState>>) -> StatusCode {
    health_with_store(state.store.as_ref()).await
}
