//! Expiry check on the stored session token.
//!
//! The payload is decoded without verifying the signature; the backend is
//! the authority, this only avoids restoring a session that is already
//! dead and bouncing through a 401 on the first request.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// `exp` claim of a JWT, in Unix seconds.
pub fn token_expiry(token: &str) -> Option<i64> {
    let mut parts = token.split('.');
    let _header = parts.next()?;
    let payload = parts.next()?;
    parts.next()?;

    let decoded = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&decoded).ok()?;
    claims.get("exp")?.as_i64()
}

/// A token that cannot be parsed counts as expired.
pub fn is_expired(token: &str, now_secs: i64) -> bool {
    match token_expiry(token) {
        Some(exp) => exp <= now_secs,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.firma",
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn reads_the_exp_claim() {
        let token = token_with_payload(r#"{"sub":"1","exp":1900000000}"#);
        assert_eq!(token_expiry(&token), Some(1_900_000_000));
    }

    #[test]
    fn expiry_is_compared_against_now() {
        let token = token_with_payload(r#"{"exp":1000}"#);
        assert!(is_expired(&token, 1000));
        assert!(is_expired(&token, 2000));
        assert!(!is_expired(&token, 999));
    }

    #[test]
    fn malformed_tokens_count_as_expired() {
        assert!(is_expired("", 0));
        assert!(is_expired("no-es-un-jwt", 0));
        assert!(is_expired("a.b.c", 0));
        let no_exp = token_with_payload(r#"{"sub":"1"}"#);
        assert!(is_expired(&no_exp, 0));
    }
}
