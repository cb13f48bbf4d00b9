//! Database query functions (Data Access Objects).
//!
//! This module centralizes all SQL, providing reusable functions for the
//! three tables and keeping query text out of the API handlers. Every
//! statement is a direct find/count/update/delete; there is no caching
//! and no transaction coordination beyond single-statement atomicity.

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::models::{AnalyticsEvent, Application, ContactMessage};

// ─── Applications ───────────────────────────────────────────────────────

pub async fn list_applications(pool: &SqlitePool) -> Result<Vec<Application>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM applications ORDER BY datetime(uploaded_at) DESC")
        .fetch_all(pool)
        .await
}

pub async fn get_application(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<Application>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM applications WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Update the read flag and return the row, or `None` for an unknown id.
///
/// Read flags never revert: `MAX` keeps an already-set flag at true even
/// when the caller passes false.
pub async fn set_application_read(
    pool: &SqlitePool,
    id: &str,
    is_read: bool,
) -> Result<Option<Application>, sqlx::Error> {
    sqlx::query("UPDATE applications SET is_read = MAX(is_read, ?) WHERE id = ?")
        .bind(is_read)
        .bind(id)
        .execute(pool)
        .await?;

    get_application(pool, id).await
}

/// Delete every row whose id is in `ids` in a single statement; returns
/// the number of rows actually removed.
pub async fn delete_applications(pool: &SqlitePool, ids: &[String]) -> Result<u64, sqlx::Error> {
    delete_by_ids(pool, "applications", ids).await
}

/// Row creation belongs to the external submission flow; this exists
/// for tests and fixtures, no handler calls it.
pub async fn insert_application(
    pool: &SqlitePool,
    application: &Application,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO applications
         (id, name, email, whatsapp, college, specialization, year_of_grad,
          cgpa, backlogs, job_title, resume_url, uploaded_at, is_read)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&application.id)
    .bind(&application.name)
    .bind(&application.email)
    .bind(&application.whatsapp)
    .bind(&application.college)
    .bind(&application.specialization)
    .bind(&application.year_of_grad)
    .bind(&application.cgpa)
    .bind(&application.backlogs)
    .bind(&application.job_title)
    .bind(&application.resume_url)
    .bind(application.uploaded_at)
    .bind(application.is_read)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn count_applications(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM applications")
        .fetch_one(pool)
        .await
}

pub async fn count_unread_applications(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE is_read = 0")
        .fetch_one(pool)
        .await
}

// ─── Contact messages ───────────────────────────────────────────────────

pub async fn list_messages(pool: &SqlitePool) -> Result<Vec<ContactMessage>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM contact_messages ORDER BY datetime(created_at) DESC")
        .fetch_all(pool)
        .await
}

pub async fn get_message(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<ContactMessage>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM contact_messages WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn set_message_read(
    pool: &SqlitePool,
    id: &str,
    is_read: bool,
) -> Result<Option<ContactMessage>, sqlx::Error> {
    sqlx::query("UPDATE contact_messages SET is_read = MAX(is_read, ?) WHERE id = ?")
        .bind(is_read)
        .bind(id)
        .execute(pool)
        .await?;

    get_message(pool, id).await
}

pub async fn delete_messages(pool: &SqlitePool, ids: &[String]) -> Result<u64, sqlx::Error> {
    delete_by_ids(pool, "contact_messages", ids).await
}

/// Fixture helper, like `insert_application`; the contact form writes
/// rows from outside this system.
pub async fn insert_message(
    pool: &SqlitePool,
    message: &ContactMessage,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO contact_messages (id, name, email, subject, message, created_at, is_read)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&message.id)
    .bind(&message.name)
    .bind(&message.email)
    .bind(&message.subject)
    .bind(&message.message)
    .bind(message.created_at)
    .bind(message.is_read)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn count_messages(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
        .fetch_one(pool)
        .await
}

pub async fn count_unread_messages(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages WHERE is_read = 0")
        .fetch_one(pool)
        .await
}

// ─── Analytics events (read-only) ───────────────────────────────────────

pub async fn count_events_named(pool: &SqlitePool, name: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM analytics_events WHERE event_name = ?")
        .bind(name)
        .fetch_one(pool)
        .await
}

pub async fn events_named_since(
    pool: &SqlitePool,
    name: &str,
    since: DateTime<Utc>,
) -> Result<Vec<AnalyticsEvent>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM analytics_events
         WHERE event_name = ? AND datetime(created_at) >= datetime(?)
         ORDER BY datetime(created_at) ASC",
    )
    .bind(name)
    .bind(since)
    .fetch_all(pool)
    .await
}

pub async fn events_named_in(
    pool: &SqlitePool,
    names: &[&str],
) -> Result<Vec<AnalyticsEvent>, sqlx::Error> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT * FROM analytics_events WHERE event_name IN (");
    let mut separated = builder.separated(", ");
    for name in names {
        separated.push_bind(*name);
    }
    separated.push_unseparated(") ORDER BY datetime(created_at) DESC");

    builder.build_query_as().fetch_all(pool).await
}

/// Events whose name contains `needle` and which carry a non-null value.
pub async fn events_containing_with_value(
    pool: &SqlitePool,
    needle: &str,
) -> Result<Vec<AnalyticsEvent>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM analytics_events
         WHERE event_name LIKE '%' || ? || '%' AND event_value IS NOT NULL",
    )
    .bind(needle)
    .fetch_all(pool)
    .await
}

pub async fn recent_events(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<AnalyticsEvent>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM analytics_events ORDER BY datetime(created_at) DESC LIMIT ?")
        .bind(limit)
        .fetch_all(pool)
        .await
}

/// Fixture helper; events come from client-side instrumentation and
/// are read-only for this system.
pub async fn insert_event(pool: &SqlitePool, event: &AnalyticsEvent) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO analytics_events (id, event_name, event_category, event_value, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&event.id)
    .bind(&event.event_name)
    .bind(&event.event_category)
    .bind(&event.event_value)
    .bind(event.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

// ─── Shared ─────────────────────────────────────────────────────────────

async fn delete_by_ids(
    pool: &SqlitePool,
    table: &str,
    ids: &[String],
) -> Result<u64, sqlx::Error> {
    if ids.is_empty() {
        return Ok(0);
    }

    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("DELETE FROM {table} WHERE id IN ("));
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(id);
    }
    separated.push_unseparated(")");

    Ok(builder.build().execute(pool).await?.rows_affected())
}
