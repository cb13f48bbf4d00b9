//! Defines the HTTP routes for the job-applications API.

use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/applications",
            get(handlers::list).patch(handlers::set_read),
        )
        .route("/api/applications/bulk-delete", post(handlers::bulk_delete))
        .route("/api/applications/filters", get(handlers::filters))
        .route("/api/applications/{id}", get(handlers::detail))
}
