//! User Entity
//!
//! A registered account. The password hash lives on the entity — this
//! domain has no separate credentials record.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    user_name::UserName, user_password::UserPassword, user_role::UserRole,
};

/// User entity as stored
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned identifier
    pub id: UserId,
    /// Username (unique, for login and display)
    pub username: UserName,
    /// Argon2id password hash
    pub password_hash: UserPassword,
    /// Role (user, admin)
    pub role: UserRole,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

/// Insert shape for a new user; the id and timestamps are store-assigned
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: UserName,
    pub password_hash: UserPassword,
    pub role: UserRole,
}

impl NewUser {
    pub fn new(username: UserName, password_hash: UserPassword, role: UserRole) -> Self {
        Self {
            username,
            password_hash,
            role,
        }
    }
}
