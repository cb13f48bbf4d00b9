//! Middleware for protecting authenticated routes.
//!
//! [`AdminSession`] implements `FromRequestParts`, so handlers opt into
//! the session guard by taking it as an argument. The token is read from
//! an `Authorization: Bearer` header or from the `admin_session` cookie;
//! any failure becomes a 401 with no detail about the cause.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header;
use axum::http::request::Parts;

use super::models::AdminSession;
use super::service::SessionService;
use crate::errors::ApiError;

const SESSION_COOKIE: &str = "admin_session";

impl<S> FromRequestParts<S> for AdminSession
where
    SessionService: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let service = SessionService::from_ref(state);
        let token = bearer_token(parts)
            .or_else(|| cookie_token(parts))
            .ok_or(ApiError::Unauthorized)?;

        Ok(service.verify(&token)?)
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

fn cookie_token(parts: &Parts) -> Option<String> {
    let cookies = parts.headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|cookie| {
        cookie
            .trim()
            .strip_prefix(SESSION_COOKIE)?
            .strip_prefix('=')
            .map(str::to_string)
    })
}
