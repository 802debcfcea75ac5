//! Browser login handshake ("login with Telegram").
//!
//! The web service creates a pending session and sends the user to
//! `t.me/<bot>?start=auth_<token>`. The bot forwards the token together with
//! the sender's profile to `{API_BASE}/auth/browser/complete`; session expiry
//! and single use are enforced by the service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{domain::User, photo::ProfilePhoto};

pub const AUTH_TOKEN_PREFIX: &str = "auth_";

/// Token carried by a `/start auth_<token>` deep link.
pub fn extract_auth_token(payload: &str) -> Option<&str> {
    payload
        .strip_prefix(AUTH_TOKEN_PREFIX)
        .filter(|token| !token.is_empty())
}

/// Profile subset the auth service stores for the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub tg_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub photo_url: String,
}

impl AuthUser {
    pub fn new(user: &User, photo: &ProfilePhoto) -> Self {
        Self {
            tg_id: user.id.0,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone().unwrap_or_default(),
            username: user.username.clone().unwrap_or_default(),
            photo_url: photo.url().unwrap_or_default().to_string(),
        }
    }
}

/// Body of `POST {API_BASE}/auth/browser/complete`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequest {
    pub token: String,
    pub user: AuthUser,
}

/// Response of a 200 reply. Unknown fields are kept for logging.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, rename = "callbackUrl")]
    pub callback_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Why a forwarding attempt produced no usable response.
///
/// Callers show one generic failure message for all variants.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth request failed: {0}")]
    Transport(String),

    #[error("auth service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("auth response is not valid json: {0}")]
    Decode(String),
}

/// Port for completing a pending browser login.
///
/// Exactly one request per call; no retries.
#[async_trait]
pub trait AuthForwarder: Send + Sync {
    async fn complete(&self, token: &str, user: &AuthUser) -> Result<AuthResponse, AuthError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::UserId;

    #[test]
    fn token_extraction() {
        assert_eq!(extract_auth_token("auth_ABC123"), Some("ABC123"));
        assert_eq!(
            extract_auth_token("auth_6f1c2a9e-0000-4000-8000-000000000000"),
            Some("6f1c2a9e-0000-4000-8000-000000000000")
        );
        assert_eq!(extract_auth_token("auth_"), None);
        assert_eq!(extract_auth_token("ref_ABC"), None);
        assert_eq!(extract_auth_token("AUTH_ABC"), None);
    }

    #[test]
    fn request_body_shape() {
        let user = User::new(UserId(99), "Ann");
        let req = AuthRequest {
            token: "tok".to_string(),
            user: AuthUser::new(&user, &ProfilePhoto::Unavailable),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "token": "tok",
                "user": {
                    "tg_id": 99,
                    "first_name": "Ann",
                    "last_name": "",
                    "username": "",
                    "photo_url": "",
                }
            })
        );
    }

    #[test]
    fn response_reads_camel_case_callback() {
        let resp: AuthResponse = serde_json::from_value(json!({
            "success": true,
            "callbackUrl": "https://site/api/auth/callback?token=t",
            "message": "ok",
        }))
        .unwrap();
        assert!(resp.success);
        assert_eq!(
            resp.callback_url.as_deref(),
            Some("https://site/api/auth/callback?token=t")
        );
        assert_eq!(resp.message.as_deref(), Some("ok"));
        assert!(resp.extra.is_empty());
    }

    #[test]
    fn response_tolerates_missing_fields() {
        let resp: AuthResponse =
            serde_json::from_value(json!({ "error": "Session expired" })).unwrap();
        assert!(!resp.success);
        assert!(resp.callback_url.is_none());
        assert_eq!(resp.extra["error"], "Session expired");
    }
}
