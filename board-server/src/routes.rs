use axum::{extract::DefaultBodyLimit, routing::get, Router, Extension};
use std::sync::Arc;

use crate::AppState;
use crate::controllers;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(controllers::home))
        .route("/health", get(controllers::health))
        .route(
            "/messages",
            get(controllers::list_messages).post(controllers::create_message),
        )
        .route(
            "/messages/:id",
            get(controllers::get_message).put(controllers::update_message),
        )
        .layer(DefaultBodyLimit::max(controllers::MAX_BODY_BYTES))
        .layer(Extension(state))
}
