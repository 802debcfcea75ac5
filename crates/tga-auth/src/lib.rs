//! HTTP adapter for the browser login handshake.
//!
//! Posts the token and profile to `{API_BASE}/auth/browser/complete`.

use async_trait::async_trait;

use tga_core::auth::{AuthError, AuthForwarder, AuthRequest, AuthResponse, AuthUser};

#[derive(Clone, Debug)]
pub struct HttpAuthForwarder {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpAuthForwarder {
    /// `endpoint` is the full `.../auth/browser/complete` URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    pub fn with_client(endpoint: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AuthForwarder for HttpAuthForwarder {
    async fn complete(&self, token: &str, user: &AuthUser) -> Result<AuthResponse, AuthError> {
        let body = AuthRequest {
            token: token.to_string(),
            user: user.clone(),
        };

        let resp = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let text = resp
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        tracing::debug!(status, tg_id = user.tg_id, "auth service replied");
        decode_response(status, &text)
    }
}

/// Only a 200 with a JSON object body counts as a response.
fn decode_response(status: u16, body: &str) -> Result<AuthResponse, AuthError> {
    if status != 200 {
        return Err(AuthError::Status {
            status,
            body: body.chars().take(200).collect(),
        });
    }
    serde_json::from_str(body).map_err(|e| AuthError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_body_is_decoded() {
        let resp = decode_response(
            200,
            r#"{"success":true,"callbackUrl":"https://tgauth2.vercel.app/api/auth/callback?token=t","message":"ok"}"#,
        )
        .unwrap();
        assert!(resp.success);
        assert_eq!(
            resp.callback_url.as_deref(),
            Some("https://tgauth2.vercel.app/api/auth/callback?token=t")
        );
    }

    #[test]
    fn non_200_is_status_error() {
        let err = decode_response(400, r#"{"error":"Session expired"}"#).unwrap_err();
        match err {
            AuthError::Status { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("Session expired"));
            }
            other => panic!("unexpected: {other:?}"),
        }

        // Other 2xx codes are not the documented success reply either.
        assert!(matches!(
            decode_response(201, "{}"),
            Err(AuthError::Status { status: 201, .. })
        ));
    }

    #[test]
    fn status_body_is_truncated() {
        let long = "x".repeat(1000);
        let Err(AuthError::Status { body, .. }) = decode_response(500, &long) else {
            panic!("expected status error");
        };
        assert_eq!(body.len(), 200);
    }

    #[test]
    fn malformed_json_is_decode_error() {
        assert!(matches!(
            decode_response(200, "<html>Bad gateway</html>"),
            Err(AuthError::Decode(_))
        ));
        assert!(matches!(
            decode_response(200, "[1,2]"),
            Err(AuthError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        // Port 9 on loopback (discard) is closed on test hosts; connection is refused.
        let fwd = HttpAuthForwarder::new("http://127.0.0.1:9/api/auth/browser/complete");
        let user = AuthUser {
            tg_id: 1,
            first_name: "A".to_string(),
            last_name: String::new(),
            username: String::new(),
            photo_url: String::new(),
        };
        let err = fwd.complete("tok", &user).await.unwrap_err();
        assert!(matches!(err, AuthError::Transport(_)));
    }
}
