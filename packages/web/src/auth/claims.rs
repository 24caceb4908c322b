//! Session token claims
//!
//! The API returns a JWT on login and registration. Its payload carries the
//! member identity; the signature is verified by the API, not here.

use base64::Engine;
use serde::Deserialize;

use crate::types::{AuthUser, UserRole};

/// Error decoding a session token
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid JWT format")]
    MalformedToken,

    #[error("Failed to decode JWT: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("Failed to parse JWT claims: {0}")]
    Claims(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct JwtClaims {
    member_id: uuid::Uuid,
    email: String,
    #[serde(default)]
    name: Option<String>,
    role: UserRole,
}

/// Decode the payload of a session token into the signed-in user
pub fn decode_token_claims(token: &str) -> Result<AuthUser, AuthError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::MalformedToken);
    }

    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.decode(parts[1])?;
    let claims: JwtClaims = serde_json::from_slice(&payload)?;

    Ok(AuthUser {
        member_id: claims.member_id,
        email: claims.email,
        name: claims.name,
        role: claims.role,
    })
}
