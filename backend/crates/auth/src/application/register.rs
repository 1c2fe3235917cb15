//! Register Use Case
//!
//! Creates a new user account. Registration does not log the caller in.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    /// Role code; defaults to "user" when unspecified
    pub role: Option<String>,
}

/// Register output
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let username =
            UserName::new(input.username).map_err(|_| AuthError::InvalidUserName)?;

        let role = match input.role.as_deref() {
            None => UserRole::default(),
            Some(code) => UserRole::from_code(code).ok_or(AuthError::InvalidRole)?,
        };

        // Pre-check for the friendly message on the common path; the UNIQUE
        // constraint behind `create` is the backstop for concurrent inserts.
        if self.user_repo.exists_by_username(&username).await? {
            return Err(AuthError::UserNameTaken);
        }

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidPassword)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = NewUser::new(username, password_hash, role);
        let user_id = self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user_id,
            username = %user.username,
            role = %user.role,
            "User registered"
        );

        Ok(RegisterOutput { user_id })
    }
}
