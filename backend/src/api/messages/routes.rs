//! Defines the HTTP routes for the contact-messages API.

use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/messages", get(handlers::list).patch(handlers::set_read))
        .route("/api/messages/bulk-delete", post(handlers::bulk_delete))
        .route("/api/messages/{id}", get(handlers::detail))
}
