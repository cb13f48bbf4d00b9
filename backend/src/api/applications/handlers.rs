//! Handler functions for the job-applications API.
//!
//! Each handler is gated by the [`AdminSession`] extractor and issues
//! direct queries through `database::queries`; the only derived logic is
//! the filter-option extraction delegated to `services`.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::api::parse_ids;
use crate::auth::AdminSession;
use crate::database::models::Application;
use crate::database::queries;
use crate::errors::ApiError;
use crate::services::filter_options::{self, FilterOptions};
use crate::AppState;

/// GET /api/applications — all rows, newest upload first.
pub async fn list(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<Application>>, ApiError> {
    Ok(Json(queries::list_applications(&state.db).await?))
}

/// GET /api/applications/{id} — detail view; the first view marks the
/// row read and the returned row reflects it.
pub async fn detail(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Application>, ApiError> {
    queries::set_application_read(&state.db, &id, true)
        .await?
        .ok_or(ApiError::NotFound)
        .map(Json)
}

/// PATCH /api/applications — body `{id, isRead}`; returns the updated row.
pub async fn set_read(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Application>, ApiError> {
    let invalid = || ApiError::InvalidInput("Invalid request body".to_string());

    let id = body
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or_else(invalid)?;
    let is_read = body.get("isRead").and_then(Value::as_bool).ok_or_else(invalid)?;

    queries::set_application_read(&state.db, id, is_read)
        .await?
        .ok_or(ApiError::NotFound)
        .map(Json)
}

/// POST /api/applications/bulk-delete — body `{ids: [string]}`.
pub async fn bulk_delete(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let ids = parse_ids(&body)?;
    let deleted = queries::delete_applications(&state.db, &ids).await?;
    Ok(Json(json!({ "success": true, "deleted": deleted })))
}

/// GET /api/applications/filters — distinct column values for the UI.
pub async fn filters(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<FilterOptions>, ApiError> {
    let applications = queries::list_applications(&state.db).await?;
    Ok(Json(filter_options::extract(&applications)))
}
