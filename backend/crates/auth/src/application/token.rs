//! Session Token Signing
//!
//! The cookie carries `"{session_id}.{signature}"` where the signature is
//! an HMAC-SHA256 over the session id, base64url-encoded. The token is
//! opaque to the client; the server rejects anything it did not sign
//! before touching the session store.

use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

/// Generate a signed session token
pub fn generate(session_id: Uuid, secret: &[u8; 32]) -> String {
    let session_id = session_id.to_string();

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!(
        "{}.{}",
        session_id,
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Parse and verify a session token
///
/// Any malformed or tampered token is `SessionInvalid`; callers decide
/// whether that becomes a 401 or a `loggedIn: false`.
pub fn parse(token: &str, secret: &[u8; 32]) -> AuthResult<Uuid> {
    let Some((session_id_str, signature_b64)) = token.split_once('.') else {
        return Err(AuthError::SessionInvalid);
    };

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id_str.as_bytes());

    let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AuthError::SessionInvalid)?;

    mac.verify_slice(&signature)
        .map_err(|_| AuthError::SessionInvalid)?;

    session_id_str
        .parse()
        .map_err(|_| AuthError::SessionInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn test_roundtrip() {
        let session_id = Uuid::new_v4();
        let token = generate(session_id, &SECRET);
        assert_eq!(parse(&token, &SECRET).unwrap(), session_id);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = generate(Uuid::new_v4(), &SECRET);
        let other = [8u8; 32];
        assert!(matches!(
            parse(&token, &other),
            Err(AuthError::SessionInvalid)
        ));
    }

    #[test]
    fn test_tampered_session_id_rejected() {
        let token = generate(Uuid::new_v4(), &SECRET);
        let (_, signature) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", Uuid::new_v4(), signature);
        assert!(matches!(
            parse(&forged, &SECRET),
            Err(AuthError::SessionInvalid)
        ));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        for token in ["", "no-dot", "a.b.c", "plain.!!!not-base64!!!"] {
            assert!(matches!(
                parse(token, &SECRET),
                Err(AuthError::SessionInvalid)
            ));
        }
    }
}
