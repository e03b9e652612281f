//! Auth endpoint port
//!
//! Defines how the session core requests a token from the collaboration
//! transport's auth endpoint.

use async_trait::async_trait;
use docroom_domain::{RoomId, SessionToken};
use thiserror::Error;

/// A single failed token request.
///
/// These are transient by design: the retry loop in
/// [`SessionAuthenticator`](crate::use_cases::authenticate_session::SessionAuthenticator)
/// absorbs them and only surfaces exhaustion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthAttemptError {
    #[error("auth endpoint returned HTTP {0}")]
    HttpStatus(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed auth response: {0}")]
    InvalidResponse(String),
}

/// One round-trip to the auth endpoint.
///
/// Implementations perform exactly one request per call; retry policy belongs
/// to the caller.
#[async_trait]
pub trait AuthEndpoint: Send + Sync {
    /// Request a session token for the given room.
    async fn request_token(&self, room: &RoomId) -> Result<SessionToken, AuthAttemptError>;
}
