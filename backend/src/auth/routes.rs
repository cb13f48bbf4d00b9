//! Defines the HTTP routes specifically for session introspection.

use axum::routing::get;
use axum::Router;

use super::handlers::me;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/auth/me", get(me))
}
