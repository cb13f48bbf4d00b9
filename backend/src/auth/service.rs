//! Core business logic for the session system.
//!
//! Tokens are `base64url(email|expires_unix) . hex(HMAC-SHA256(payload))`.
//! Whatever completes the external OAuth flow calls [`SessionService::issue`]
//! with the signed-in email; every guarded request goes through
//! [`SessionService::verify`], which checks the signature, the expiry,
//! and the admin allow-list, in that order.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::errors::AuthError;
use super::models::AdminSession;

type HmacSha256 = Hmac<Sha256>;

#[derive(Clone)]
pub struct SessionService {
    secret: Vec<u8>,
    allow_list: Vec<String>,
}

impl SessionService {
    pub fn new(secret: &str, allow_list: Vec<String>) -> Self {
        Self {
            secret: secret.as_bytes().to_vec(),
            allow_list,
        }
    }

    pub fn is_allow_listed(&self, email: &str) -> bool {
        self.allow_list.iter().any(|allowed| allowed == email)
    }

    /// Mint a token for an allow-listed email, valid for `ttl`.
    pub fn issue(&self, email: &str, ttl: Duration) -> Result<String, AuthError> {
        if !self.is_allow_listed(email) {
            return Err(AuthError::NotAllowListed);
        }

        let expires = (Utc::now() + ttl).timestamp();
        let payload = format!("{email}|{expires}");

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let signature = mac.finalize().into_bytes();

        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(payload.as_bytes()),
            hex::encode(signature)
        ))
    }

    /// Validate a token and return the identity it carries.
    pub fn verify(&self, token: &str) -> Result<AdminSession, AuthError> {
        let (payload_b64, signature_hex) =
            token.split_once('.').ok_or(AuthError::MalformedToken)?;
        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| AuthError::MalformedToken)?;
        let signature = hex::decode(signature_hex).map_err(|_| AuthError::MalformedToken)?;

        let mut mac = self.mac()?;
        mac.update(&payload);
        // Constant-time comparison.
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::InvalidSignature)?;

        let payload = String::from_utf8(payload).map_err(|_| AuthError::MalformedToken)?;
        let (email, expires) = payload.split_once('|').ok_or(AuthError::MalformedToken)?;
        let expires: i64 = expires.parse().map_err(|_| AuthError::MalformedToken)?;

        if expires < Utc::now().timestamp() {
            return Err(AuthError::Expired);
        }
        if !self.is_allow_listed(email) {
            return Err(AuthError::NotAllowListed);
        }

        Ok(AdminSession {
            email: email.to_string(),
        })
    }

    fn mac(&self) -> Result<HmacSha256, AuthError> {
        HmacSha256::new_from_slice(&self.secret).map_err(|_| AuthError::InvalidSignature)
    }
}
