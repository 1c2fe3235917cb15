//! UserPassword Value Object
//!
//! Wraps the platform password primitives with domain naming:
//! [`RawPassword`] is a validated clear-text password on its way into a
//! hash or a verification; [`UserPassword`] is the stored Argon2id hash.
//! Clear text never appears in an entity.

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};

/// Validated clear-text password (zeroized on drop, never stored)
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        Ok(Self(ClearTextPassword::new(raw)?))
    }
}

/// Stored password hash (Argon2id, PHC string format)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password, optionally mixing in the application pepper
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        Ok(Self(raw.0.hash(pepper)?))
    }

    /// Wrap a hash loaded from the database
    pub fn from_db(hash: String) -> Self {
        Self(HashedPassword::from_phc(hash))
    }

    /// Verify a raw password against this hash
    pub fn verify(
        &self,
        raw: &RawPassword,
        pepper: Option<&[u8]>,
    ) -> Result<bool, PasswordHashError> {
        self.0.verify(&raw.0, pepper)
    }

    /// PHC string for persistence
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
