//! Handler functions for authentication-related API endpoints.

use axum::Json;
use serde_json::{json, Value};

use super::models::AdminSession;

/// Who am I signed in as. Mostly useful for the UI header.
pub async fn me(session: AdminSession) -> Json<Value> {
    Json(json!({ "email": session.email }))
}
