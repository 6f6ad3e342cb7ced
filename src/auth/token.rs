//! Bearer token inspection.
//!
//! The backend issues JWTs. The client never verifies signatures; it only
//! reads `exp` so that a stale stored session is not restored on startup.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;

#[derive(Deserialize)]
struct JwtClaims {
    exp: i64,
}

/// Expiration time (Unix seconds) of a JWT, if the token is one.
pub fn jwt_expires_at(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: JwtClaims = serde_json::from_slice(&decoded).ok()?;
    Some(claims.exp)
}

/// Whether the token is known to be expired at `now` (Unix seconds).
///
/// Opaque tokens are never considered expired; the server decides.
pub fn token_is_expired(token: &str, now: i64) -> bool {
    jwt_expires_at(token).is_some_and(|exp| now >= exp)
}
