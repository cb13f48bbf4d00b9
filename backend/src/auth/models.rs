//! Data structures for authentication-related entities.

use serde::Serialize;

/// Identity carried by a verified, allow-listed session token.
///
/// Doubles as an axum extractor (see `auth::middleware`), so taking it
/// as a handler argument is what makes a route session-gated.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AdminSession {
    pub email: String,
}
