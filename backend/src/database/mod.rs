//! Module for database connection setup and common utilities.
//!
//! This module initializes the connection pool and applies the schema.
//! Schema statements are idempotent so connecting to an existing
//! database is a no-op.

pub mod models;
pub mod queries;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};

const SCHEMA: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS applications (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        whatsapp TEXT NOT NULL DEFAULT '',
        college TEXT NOT NULL DEFAULT '',
        specialization TEXT NOT NULL DEFAULT '',
        year_of_grad TEXT NOT NULL DEFAULT '',
        cgpa TEXT NOT NULL DEFAULT '',
        backlogs TEXT NOT NULL DEFAULT '',
        job_title TEXT NOT NULL DEFAULT '',
        resume_url TEXT NOT NULL DEFAULT '',
        uploaded_at TEXT NOT NULL,
        is_read BOOLEAN NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS contact_messages (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        subject TEXT NOT NULL DEFAULT '',
        message TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL,
        is_read BOOLEAN NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS analytics_events (
        id TEXT PRIMARY KEY,
        event_name TEXT NOT NULL,
        event_category TEXT,
        event_value TEXT,
        created_at TEXT NOT NULL
    )",
];

/// Open a pool on `database_url` and ensure the schema exists.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .log_slow_statements(log::LevelFilter::Warn, Duration::from_secs(1));

    // An in-memory database exists per connection; a second pooled
    // connection would see an empty schema.
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(opts)
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
