//! Identity and authentication exchange types.

use serde::{Deserialize, Serialize};

/// A registered user profile as returned by the identity endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub mobile: String,
    #[serde(default)]
    pub email: Option<String>,
    /// RFC 3339 creation timestamp, opaque to the client.
    pub created_at: String,
}

/// Body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub full_name: String,
    pub mobile: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginPayload {
    pub mobile: String,
    pub password: String,
}

/// Response of both `/auth/register` and `/auth/login`.
///
/// The wire also carries a `token_type: "bearer"` field; it is constant and
/// ignored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_parses_service_shape() {
        let body = r#"{
            "access_token": "tok-123",
            "token_type": "bearer",
            "user": {
                "id": 7,
                "full_name": "Someone",
                "mobile": "09120000000",
                "email": null,
                "created_at": "2026-01-05T10:00:00Z"
            }
        }"#;
        let parsed: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.access_token, "tok-123");
        assert_eq!(parsed.user.id, 7);
        assert!(parsed.user.email.is_none());
    }

    #[test]
    fn register_payload_omits_absent_email() {
        let payload = RegisterPayload {
            full_name: "Someone".into(),
            mobile: "09120000000".into(),
            password: "validpass".into(),
            email: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("email"));
    }
}
