//! API DTOs (Data Transfer Objects)
//!
//! Request fields are `Option<String>` on purpose: the legacy frontend may
//! omit any of them, and a missing field must produce the contract's own
//! 400 body, not a framework rejection.

use serde::{Deserialize, Serialize};

use crate::domain::entity::{session::Session, user::User};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    /// Role code, defaults to "user"
    pub role: Option<String>,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserIdentity,
}

// ============================================================================
// Shared shapes
// ============================================================================

/// Identity triple returned by login and the session check
#[derive(Debug, Clone, Serialize)]
pub struct UserIdentity {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl From<&User> for UserIdentity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i64(),
            username: user.username.as_str().to_string(),
            role: user.role.code().to_string(),
        }
    }
}

impl From<&Session> for UserIdentity {
    fn from(session: &Session) -> Self {
        Self {
            id: session.user_id.as_i64(),
            username: session.username.clone(),
            role: session.role.code().to_string(),
        }
    }
}

/// Simple `{success, message}` acknowledgment
#[derive(Debug, Clone, Serialize)]
pub struct AuthAck {
    pub success: bool,
    pub message: String,
}

impl AuthAck {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response (`/check-auth`, `/check_login`)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserIdentity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_missing_fields() {
        let req: RegisterRequest = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert_eq!(req.username.as_deref(), Some("alice"));
        assert!(req.password.is_none());
        assert!(req.role.is_none());

        let req: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_none());
    }

    #[test]
    fn test_login_request_deserialization() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"username":"alice","password":"pw1"}"#).unwrap();
        assert_eq!(req.username.as_deref(), Some("alice"));
        assert_eq!(req.password.as_deref(), Some("pw1"));
    }

    #[test]
    fn test_session_status_logged_in_key() {
        let response = SessionStatusResponse {
            logged_in: true,
            user: Some(UserIdentity {
                id: 1,
                username: "alice".to_string(),
                role: "user".to_string(),
            }),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""loggedIn":true"#));
        assert!(json.contains(r#""id":1"#));
        assert!(json.contains(r#""username":"alice""#));
        assert!(json.contains(r#""role":"user""#));
    }

    #[test]
    fn test_session_status_omits_user_when_absent() {
        let response = SessionStatusResponse {
            logged_in: false,
            user: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"loggedIn":false}"#);
    }

    #[test]
    fn test_login_response_serialization() {
        let response = LoginResponse {
            success: true,
            message: "Đăng nhập thành công".to_string(),
            user: UserIdentity {
                id: 1,
                username: "alice".to_string(),
                role: "user".to_string(),
            },
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""success":true"#));
        assert!(json.contains("Đăng nhập thành công"));
        assert!(json.contains(r#""user":{"#));
    }

    #[test]
    fn test_ack_serialization() {
        let json = serde_json::to_string(&AuthAck::ok("Đăng ký thành công")).unwrap();
        assert!(json.contains(r#""success":true"#));
        assert!(json.contains("Đăng ký thành công"));
    }
}
