//! Session Entity
//!
//! Server-side record binding an opaque cookie token to a user identity.
//! Holds a value copy of {id, username, role} — not a live reference to
//! the user row. Expiry is fixed at creation; there is no sliding window.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::value_object::user_role::UserRole;

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4); the signed cookie token references this
    pub session_id: Uuid,
    /// Reference to User
    pub user_id: UserId,
    /// Username copy at login time
    pub username: String,
    /// Role copy at login time
    pub role: UserRole,
    /// Session expiration (Unix timestamp ms), fixed at creation
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session for a logged-in user
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user: &User, ttl_ms: i64) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id: user.id,
            username: user.username.as_str().to_string(),
            role: user.role,
            expires_at_ms: now.timestamp_millis() + ttl_ms,
            created_at: now,
        }
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        user_name::UserName, user_password::{RawPassword, UserPassword},
    };
    use kernel::id::UserId;

    fn sample_user() -> User {
        let raw = RawPassword::new("pw1".to_string()).unwrap();
        let now = Utc::now();
        User {
            id: UserId::from_i64(1),
            username: UserName::new("alice").unwrap(),
            password_hash: UserPassword::from_raw(&raw, None).unwrap(),
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_session_copies_identity() {
        let user = sample_user();
        let session = Session::new(&user, 3_600_000);

        assert_eq!(session.user_id, user.id);
        assert_eq!(session.username, "alice");
        assert_eq!(session.role, UserRole::User);
        assert!(!session.is_expired());
    }

    #[test]
    fn test_session_expiry() {
        let user = sample_user();

        let mut session = Session::new(&user, 3_600_000);
        session.expires_at_ms = Utc::now().timestamp_millis() - 1;
        assert!(session.is_expired());
    }

    #[test]
    fn test_session_ids_are_unique() {
        let user = sample_user();
        let a = Session::new(&user, 1000);
        let b = Session::new(&user, 1000);
        assert_ne!(a.session_id, b.session_id);
    }
}
