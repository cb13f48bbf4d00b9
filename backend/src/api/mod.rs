//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the admin API domains:
//! job applications, contact messages, and analytics. Session
//! introspection routes live under `auth` instead.

pub mod analytics;
pub mod applications;
pub mod messages;

use axum::Json;
use serde_json::{json, Value};

use crate::errors::ApiError;

/// Liveness probe; intentionally unauthenticated.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Extract `ids` from a bulk-delete body.
///
/// Rejects anything that is not an array of strings; an empty array is
/// valid and deletes nothing.
pub(crate) fn parse_ids(body: &Value) -> Result<Vec<String>, ApiError> {
    let invalid = || ApiError::InvalidInput("Invalid ids".to_string());

    body.get("ids")
        .and_then(Value::as_array)
        .ok_or_else(invalid)?
        .iter()
        .map(|id| id.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}
