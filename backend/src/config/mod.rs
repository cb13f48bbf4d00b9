//! Central module for application-wide configuration settings.
//!
//! This module handles loading configuration parameters from the
//! environment: server port, database URL, the session-signing secret,
//! and the admin email allow-list.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub session_secret: String,
    pub admin_emails: Vec<String>,
}

impl Config {
    pub fn load() -> Self {
        let admin_emails = parse_admin_emails(&try_load::<String>("ADMIN_EMAILS", ""));
        if admin_emails.is_empty() {
            warn!("ADMIN_EMAILS is empty, every session will be rejected");
        }

        Self {
            port: try_load("PORT", "8080"),
            database_url: try_load("DATABASE_URL", "sqlite://admin.db"),
            session_secret: env::var("SESSION_SECRET").expect("SESSION_SECRET must be set"),
            admin_emails,
        }
    }
}

/// Comma-separated allow-list; entries are trimmed and blanks dropped.
pub fn parse_admin_emails(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_string)
        .collect()
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
