//! Defines the HTTP routes for the dashboard and analytics summary.

use axum::routing::get;
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/dashboard", get(handlers::dashboard))
        .route("/api/analytics", get(handlers::summary))
}
