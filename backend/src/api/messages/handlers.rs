//! Handler functions for the contact-messages API.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::api::parse_ids;
use crate::auth::AdminSession;
use crate::database::models::ContactMessage;
use crate::database::queries;
use crate::errors::ApiError;
use crate::AppState;

/// GET /api/messages — all rows, newest first.
pub async fn list(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    Ok(Json(queries::list_messages(&state.db).await?))
}

/// GET /api/messages/{id} — detail view; marks the row read.
pub async fn detail(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContactMessage>, ApiError> {
    queries::set_message_read(&state.db, &id, true)
        .await?
        .ok_or(ApiError::NotFound)
        .map(Json)
}

/// PATCH /api/messages — body `{id, isRead}`; returns the updated row.
pub async fn set_read(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ContactMessage>, ApiError> {
    let invalid = || ApiError::InvalidInput("Invalid request body".to_string());

    let id = body
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or_else(invalid)?;
    let is_read = body.get("isRead").and_then(Value::as_bool).ok_or_else(invalid)?;

    queries::set_message_read(&state.db, id, is_read)
        .await?
        .ok_or(ApiError::NotFound)
        .map(Json)
}

/// POST /api/messages/bulk-delete — body `{ids: [string]}`.
pub async fn bulk_delete(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let ids = parse_ids(&body)?;
    let deleted = queries::delete_messages(&state.db, &ids).await?;
    Ok(Json(json!({ "success": true, "deleted": deleted })))
}
