//! Password Hashing and Verification
//!
//! Argon2id password handling with:
//! - Memory-hard hashing (OWASP recommended parameters)
//! - Zeroization of sensitive data
//! - Optional application-wide pepper
//!
//! The acceptance policy is intentionally permissive: the legacy frontend
//! contract accepts any non-empty password, so brute-force resistance comes
//! from the adaptive hash, not from a length policy.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Maximum password length in Unicode code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password contains invalid characters (control characters)
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// This type ensures that password data is securely erased from memory
/// when the value is dropped, preventing memory inspection attacks.
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with validation
    ///
    /// Unicode is normalized using NFKC before validation. Rejects empty or
    /// whitespace-only input, control characters, and inputs longer than
    /// [`MAX_PASSWORD_LENGTH`] code points. There is no minimum length.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();

        let trimmed = normalized.trim();
        if trimmed.is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // Count Unicode code points, not bytes
        let char_count = normalized.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        for ch in normalized.chars() {
            if ch.is_control() {
                return Err(PasswordPolicyError::InvalidCharacter);
            }
        }

        Ok(Self(normalized))
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret for additional security
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = Self::with_pepper(self.as_bytes(), pepper);

        // Random salt, 128 bits
        let salt = SaltString::generate(OsRng);

        // Argon2id with the library defaults (OWASP parameters: m=19456, t=2, p=1)
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword(hash.to_string()))
    }

    fn with_pepper(bytes: &[u8], pepper: Option<&[u8]>) -> Vec<u8> {
        match pepper {
            Some(p) => {
                let mut combined = bytes.to_vec();
                combined.extend_from_slice(p);
                combined
            }
            None => bytes.to_vec(),
        }
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClearTextPassword(***)")
    }
}

// ============================================================================
// Hashed Password (PHC string)
// ============================================================================

/// PHC-formatted Argon2id password hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Wrap a hash string loaded from the database
    pub fn from_phc(hash: String) -> Self {
        Self(hash)
    }

    /// Get the PHC string for persistence
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verify a clear text password against this hash
    ///
    /// The pepper must match the one used at hash time.
    pub fn verify(
        &self,
        password: &ClearTextPassword,
        pepper: Option<&[u8]>,
    ) -> Result<bool, PasswordHashError> {
        let parsed =
            PasswordHash::new(&self.0).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        let password_bytes = ClearTextPassword::with_pepper(password.as_bytes(), pepper);

        Ok(Argon2::default()
            .verify_password(&password_bytes, &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let password = ClearTextPassword::new("correct horse battery".to_string()).unwrap();
        let hash = password.hash(None).unwrap();

        assert!(hash.as_str().starts_with("$argon2id$"));
        assert!(hash.verify(&password, None).unwrap());
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let password = ClearTextPassword::new("correct horse battery".to_string()).unwrap();
        let hash = password.hash(None).unwrap();

        let wrong = ClearTextPassword::new("wrong password".to_string()).unwrap();
        assert!(!hash.verify(&wrong, None).unwrap());
    }

    #[test]
    fn test_short_password_accepted() {
        // The legacy contract has no minimum length; "pw1" must hash fine.
        let password = ClearTextPassword::new("pw1".to_string()).unwrap();
        let hash = password.hash(None).unwrap();
        assert!(hash.verify(&password, None).unwrap());
    }

    #[test]
    fn test_empty_password_rejected() {
        assert_eq!(
            ClearTextPassword::new(String::new()).unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
        assert_eq!(
            ClearTextPassword::new("   ".to_string()).unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
    }

    #[test]
    fn test_control_characters_rejected() {
        assert_eq!(
            ClearTextPassword::new("pass\u{0000}word".to_string()).unwrap_err(),
            PasswordPolicyError::InvalidCharacter
        );
    }

    #[test]
    fn test_overlong_password_rejected() {
        let raw = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        assert!(matches!(
            ClearTextPassword::new(raw).unwrap_err(),
            PasswordPolicyError::TooLong { .. }
        ));
    }

    #[test]
    fn test_pepper_changes_verification() {
        let password = ClearTextPassword::new("peppered secret".to_string()).unwrap();
        let hash = password.hash(Some(b"app-pepper")).unwrap();

        assert!(hash.verify(&password, Some(b"app-pepper")).unwrap());
        assert!(!hash.verify(&password, None).unwrap());
        assert!(!hash.verify(&password, Some(b"other-pepper")).unwrap());
    }

    #[test]
    fn test_invalid_hash_format() {
        let password = ClearTextPassword::new("whatever".to_string()).unwrap();
        let bad = HashedPassword::from_phc("not a phc string".to_string());
        assert!(matches!(
            bad.verify(&password, None),
            Err(PasswordHashError::InvalidHashFormat)
        ));
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = ClearTextPassword::new("supersecret".to_string()).unwrap();
        let debug = format!("{:?}", password);
        assert!(!debug.contains("supersecret"));
    }
}
