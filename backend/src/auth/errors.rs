//! Custom error types specific to authentication failures.
//!
//! The distinctions matter for logs and tests; on the wire every one of
//! them collapses into a 401 with no detail.

use thiserror::Error;

use crate::errors::ApiError;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing session token")]
    MissingToken,

    #[error("malformed session token")]
    MalformedToken,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("session expired")]
    Expired,

    #[error("email is not on the admin allow-list")]
    NotAllowListed,
}

impl From<AuthError> for ApiError {
    fn from(_: AuthError) -> Self {
        ApiError::Unauthorized
    }
}
