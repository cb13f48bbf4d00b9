//! Rust structs that represent database table mappings.
//!
//! These models double as wire types: column names are snake_case in the
//! store and camelCase on the wire, matching what the admin UI expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job application submitted through the public careers form.
///
/// Rows are created by the external submission flow; this system only
/// reads them, flips `is_read`, and deletes them.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub college: String,
    pub specialization: String,
    pub year_of_grad: String,
    pub cgpa: String,
    pub backlogs: String,
    pub job_title: String,
    pub resume_url: String,
    pub uploaded_at: DateTime<Utc>,
    pub is_read: bool,
}

/// A message submitted through the public contact form.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

/// A client-side instrumentation event. Immutable and read-only here;
/// relationships to the other tables are by `event_name` convention
/// (e.g. "contact_form_submit"), not foreign keys.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub id: String,
    pub event_name: String,
    pub event_category: Option<String>,
    pub event_value: Option<String>,
    pub created_at: DateTime<Utc>,
}
