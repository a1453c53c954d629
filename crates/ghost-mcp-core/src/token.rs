//! Admin token generation for the Ghost Admin API.
//!
//! Ghost staff/admin API keys come as `<keyId>:<hexSecret>`. Every
//! administrative request carries a short-lived HS256 JWT derived from
//! that pair: the header names the key id via `kid`, the claims assert
//! the `/admin/` audience, and the signature is keyed by the hex-decoded
//! secret half. Tokens expire five minutes after issuance to limit
//! replay exposure.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Audience claim asserted on every admin token.
pub const ADMIN_AUDIENCE: &str = "/admin/";

/// Token lifetime in seconds (expiry = issued-at + 5 minutes).
pub const TOKEN_TTL_SECS: i64 = 300;

/// Claims carried by an admin token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
    /// Audience (`/admin/`).
    pub aud: String,
}

/// Split an admin key into its `(keyId, hexSecret)` halves.
fn split_key(admin_key: &str) -> Result<(&str, &str)> {
    let (id, secret) = admin_key
        .split_once(':')
        .ok_or_else(|| Error::CredentialFormat("expected '<id>:<secret>' format".into()))?;
    if id.is_empty() || secret.is_empty() {
        return Err(Error::CredentialFormat(
            "key id and secret must both be non-empty".into(),
        ));
    }
    Ok((id, secret))
}

/// The key-id half of an admin key, if the key is well formed.
///
/// Safe to expose in diagnostics; the secret half never is.
pub fn key_id(admin_key: &str) -> Option<&str> {
    split_key(admin_key).ok().map(|(id, _)| id)
}

/// Mint an admin token for the current time.
pub fn mint_admin_token(admin_key: &str) -> Result<String> {
    mint_admin_token_at(admin_key, Utc::now())
}

/// Mint an admin token with an explicit issued-at instant.
///
/// Deterministic for a fixed key and instant, which is what the tests
/// lean on. Fails with [`Error::CredentialFormat`] before any signing
/// work when the key is malformed; a malformed token is never sent.
pub fn mint_admin_token_at(admin_key: &str, issued_at: DateTime<Utc>) -> Result<String> {
    let (id, secret_hex) = split_key(admin_key)?;
    let secret = hex::decode(secret_hex)
        .map_err(|_| Error::CredentialFormat("secret half is not valid hex".into()))?;

    let iat = issued_at.timestamp();
    let claims = AdminClaims {
        iat,
        exp: iat + TOKEN_TTL_SECS,
        aud: ADMIN_AUDIENCE.to_string(),
    };

    let mut header = Header::new(Algorithm::HS256);
    header.kid = Some(id.to_string());

    let token = encode(&header, &claims, &EncodingKey::from_secret(&secret))?;
    Ok(token)
}

/// Convenience: `Duration` form of the token lifetime.
pub fn token_ttl() -> Duration {
    Duration::seconds(TOKEN_TTL_SECS)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};

    const KEY: &str = "abc123:deadbeefcafebabe";

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    fn decode_claims(token: &str) -> AdminClaims {
        let secret = hex::decode("deadbeefcafebabe").unwrap();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[ADMIN_AUDIENCE]);
        validation.validate_exp = false;
        decode::<AdminClaims>(token, &DecodingKey::from_secret(&secret), &validation)
            .unwrap()
            .claims
    }

    #[test]
    fn test_mint_is_deterministic_for_fixed_instant() {
        let a = mint_admin_token_at(KEY, fixed_instant()).unwrap();
        let b = mint_admin_token_at(KEY, fixed_instant()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tokens_differ_across_instants() {
        let a = mint_admin_token_at(KEY, fixed_instant()).unwrap();
        let b = mint_admin_token_at(KEY, fixed_instant() + Duration::seconds(1)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_expiry_is_issued_at_plus_five_minutes() {
        let token = mint_admin_token_at(KEY, fixed_instant()).unwrap();
        let claims = decode_claims(&token);
        assert_eq!(claims.iat, fixed_instant().timestamp());
        assert_eq!(claims.exp, claims.iat + 300);
        assert_eq!(claims.aud, "/admin/");
    }

    #[test]
    fn test_header_carries_key_id() {
        let token = mint_admin_token_at(KEY, fixed_instant()).unwrap();
        let header = decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS256);
        assert_eq!(header.kid.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_missing_colon_is_rejected() {
        let err = mint_admin_token_at("nocolonhere", fixed_instant()).unwrap_err();
        assert!(matches!(err, Error::CredentialFormat(_)));
    }

    #[test]
    fn test_empty_halves_are_rejected() {
        assert!(matches!(
            mint_admin_token_at(":deadbeef", fixed_instant()),
            Err(Error::CredentialFormat(_))
        ));
        assert!(matches!(
            mint_admin_token_at("abc123:", fixed_instant()),
            Err(Error::CredentialFormat(_))
        ));
    }

    #[test]
    fn test_non_hex_secret_is_rejected() {
        let err = mint_admin_token_at("abc123:nothex!", fixed_instant()).unwrap_err();
        assert!(matches!(err, Error::CredentialFormat(_)));
    }

    #[test]
    fn test_key_id_exposes_only_id_half() {
        assert_eq!(key_id("abc123:deadbeef"), Some("abc123"));
        assert_eq!(key_id("malformed"), None);
    }

    #[test]
    fn test_current_time_mint_succeeds() {
        let token = mint_admin_token(KEY).unwrap();
        // Three dot-separated segments of a compact JWS.
        assert_eq!(token.split('.').count(), 3);
    }
}
