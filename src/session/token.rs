//! Bearer token decoding
//!
//! Tokens are JWTs. Only the payload segment is read; the signature is the
//! server's business.

use base64::{Engine as _, engine::general_purpose};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::models::Role;
use crate::error::DecodeError;

/// Identity carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User ID
    #[serde(alias = "sub")]
    pub id: i64,

    /// User email address
    pub email: String,

    /// Role granted to the user
    pub role: Role,

    /// Issued at (Unix seconds)
    #[serde(rename = "iat")]
    pub issued_at: i64,

    /// Expires at (Unix seconds)
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl TokenClaims {
    /// Whether the token is still usable at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() < self.expires_at.saturating_mul(1000)
    }

    /// Whether the token is still usable right now.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Expiry as a timestamp, if representable.
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.expires_at, 0)
    }
}

/// Decode the claims of a token without verifying its signature.
pub fn decode(token: &str) -> Result<TokenClaims, DecodeError> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(DecodeError::Segments(parts.len()));
    }

    let payload = general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| DecodeError::Encoding(e.to_string()))?;

    serde_json::from_slice(&payload).map_err(|e| DecodeError::Claims(e.to_string()))
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Build an unsigned token around the given claims.
    pub fn make_token(claims: &serde_json::Value) -> String {
        let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = general_purpose::URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{}.{}.signature", header, payload)
    }

    pub fn token_expiring_at(exp: i64) -> String {
        make_token(&serde_json::json!({
            "id": 7,
            "email": "ada@example.com",
            "role": "recruiter",
            "iat": exp - 3600,
            "exp": exp,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn test_decode_valid_token() {
        let exp = Utc::now().timestamp() + 3600;
        let claims = decode(&token_expiring_at(exp)).unwrap();

        assert_eq!(claims.id, 7);
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.role, Role::Recruiter);
        assert_eq!(claims.expires_at, exp);
        assert!(claims.is_valid());
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let exp = Utc::now().timestamp() - 1;
        let claims = decode(&token_expiring_at(exp)).unwrap();
        assert!(!claims.is_valid());
    }

    #[test]
    fn test_validity_boundary_is_exclusive() {
        let claims = decode(&token_expiring_at(1_700_000_000)).unwrap();
        let at_expiry = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let just_before = DateTime::from_timestamp_millis(1_700_000_000_000 - 1).unwrap();

        assert!(!claims.is_valid_at(at_expiry));
        assert!(claims.is_valid_at(just_before));
    }

    #[test]
    fn test_decode_accepts_sub_alias() {
        let token = make_token(&serde_json::json!({
            "sub": 3, "email": "w@example.com", "role": "WORKER", "iat": 1, "exp": 2,
        }));
        let claims = decode(&token).unwrap();
        assert_eq!(claims.id, 3);
        assert_eq!(claims.role, Role::Worker);
    }

    #[test]
    fn test_decode_rejects_wrong_segment_count() {
        assert_eq!(decode("abc"), Err(DecodeError::Segments(1)));
        assert_eq!(decode("a.b"), Err(DecodeError::Segments(2)));
        assert_eq!(decode(""), Err(DecodeError::Segments(1)));
    }

    #[test]
    fn test_decode_rejects_bad_encoding() {
        assert!(matches!(
            decode("header.!!not-base64!!.sig"),
            Err(DecodeError::Encoding(_))
        ));
    }

    #[test]
    fn test_decode_rejects_missing_claims() {
        let token = make_token(&serde_json::json!({ "email": "x@example.com" }));
        assert!(matches!(decode(&token), Err(DecodeError::Claims(_))));

        let token = format!(
            "h.{}.s",
            general_purpose::URL_SAFE_NO_PAD.encode("not json")
        );
        assert!(matches!(decode(&token), Err(DecodeError::Claims(_))));
    }

    #[test]
    fn test_decode_tolerates_padding() {
        let exp = Utc::now().timestamp() + 60;
        let token = token_expiring_at(exp);
        let parts: Vec<&str> = token.split('.').collect();
        let padded = format!("{}.{}==.{}", parts[0], parts[1], parts[2]);
        assert!(decode(&padded).is_ok());
    }
}
