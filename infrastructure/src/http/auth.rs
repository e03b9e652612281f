//! HTTP adapter for the auth endpoint port.
//!
//! `POST {url}` with body `{"room": <id>}`; a 2xx response carries
//! `{"token": <opaque>}`. Anything else maps to a transient
//! [`AuthAttemptError`] for the retry loop to absorb.

use async_trait::async_trait;
use docroom_application::ports::auth_endpoint::{AuthAttemptError, AuthEndpoint};
use docroom_domain::{RoomId, SessionToken};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize)]
struct AuthRequest<'a> {
    room: &'a str,
}

#[derive(Deserialize)]
struct AuthResponse {
    token: String,
}

/// reqwest-backed implementation of [`AuthEndpoint`]
pub struct HttpAuthEndpoint {
    client: reqwest::Client,
    url: String,
}

impl HttpAuthEndpoint {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl AuthEndpoint for HttpAuthEndpoint {
    async fn request_token(&self, room: &RoomId) -> Result<SessionToken, AuthAttemptError> {
        debug!("requesting session token for room {}", room);

        let response = self
            .client
            .post(&self.url)
            .json(&AuthRequest { room: room.as_str() })
            .send()
            .await
            .map_err(|e| AuthAttemptError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthAttemptError::HttpStatus(status.as_u16()));
        }

        let body: AuthResponse = response
            .json()
            .await
            .map_err(|e| AuthAttemptError::InvalidResponse(e.to_string()))?;

        Ok(SessionToken::new(body.token))
    }
}
