//! Session bootstrap: drives the authentication state machine.
//!
//! Owns a [`SessionState`] and a [`SessionAuthenticator`]; `connect` walks
//! `Idle -> Authenticating -> Authenticated | Failed`, and `retry` re-enters
//! `Authenticating` from `Failed`. Exhaustion lands in the state as a
//! user-facing recoverable message, never as a panic or an unhandled error.

use crate::use_cases::authenticate_session::{AuthenticateError, SessionAuthenticator};
use docroom_domain::{RoomId, SessionPhase, SessionState, SessionStateError};
use tracing::warn;

/// User-facing message stored on exhaustion.
const AUTH_FAILED_MESSAGE: &str =
    "Failed to authenticate with the collaboration service. Please retry.";

/// Bootstraps a participant into a room.
pub struct SessionBootstrap {
    authenticator: SessionAuthenticator,
    state: SessionState,
}

impl SessionBootstrap {
    pub fn new(authenticator: SessionAuthenticator) -> Self {
        Self {
            authenticator,
            state: SessionState::new(),
        }
    }

    /// Current bootstrap state for the presentation layer.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Authenticate into `room`, driving the state machine to a terminal
    /// phase. Only misuse of the state machine (e.g. connecting while
    /// already authenticated) errors; authentication failure is recorded
    /// as the `Failed` state instead.
    pub async fn connect(&mut self, room: &RoomId) -> Result<SessionPhase, SessionStateError> {
        self.state.begin_authentication()?;

        match self.authenticator.authenticate(room).await {
            Ok(token) => self.state.complete(token)?,
            Err(AuthenticateError::Cancelled) => {
                warn!("bootstrap of room {} cancelled", room);
                self.state.fail("Authentication cancelled.")?;
            }
            Err(e) => {
                warn!("bootstrap of room {} exhausted: {}", room, e);
                self.state.fail(AUTH_FAILED_MESSAGE)?;
            }
        }
        Ok(self.state.phase())
    }

    /// Manual retry action offered to the user after a failure.
    pub async fn retry(&mut self, room: &RoomId) -> Result<SessionPhase, SessionStateError> {
        if self.state.phase() != SessionPhase::Failed {
            return Err(SessionStateError::InvalidTransition {
                action: "retry",
                phase: self.state.phase(),
            });
        }
        self.connect(room).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::auth_endpoint::{AuthAttemptError, AuthEndpoint};
    use async_trait::async_trait;
    use docroom_domain::SessionToken;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Endpoint whose outcome can be flipped between calls.
    struct SwitchableEndpoint {
        healthy: Mutex<bool>,
    }

    #[async_trait]
    impl AuthEndpoint for SwitchableEndpoint {
        async fn request_token(&self, _room: &RoomId) -> Result<SessionToken, AuthAttemptError> {
            if *self.healthy.lock().unwrap() {
                Ok(SessionToken::new("tok"))
            } else {
                Err(AuthAttemptError::HttpStatus(502))
            }
        }
    }

    fn bootstrap(endpoint: Arc<SwitchableEndpoint>) -> SessionBootstrap {
        SessionBootstrap::new(
            SessionAuthenticator::new(endpoint).with_policy(2, Duration::from_millis(1)),
        )
    }

    #[tokio::test]
    async fn test_connect_reaches_authenticated() {
        let endpoint = Arc::new(SwitchableEndpoint {
            healthy: Mutex::new(true),
        });
        let mut bootstrap = bootstrap(endpoint);

        let phase = bootstrap.connect(&RoomId::new("doc1")).await.unwrap();
        assert_eq!(phase, SessionPhase::Authenticated);
        assert!(bootstrap.state().token().is_some());
    }

    #[tokio::test]
    async fn test_exhaustion_lands_in_failed_with_message() {
        let endpoint = Arc::new(SwitchableEndpoint {
            healthy: Mutex::new(false),
        });
        let mut bootstrap = bootstrap(endpoint);

        let phase = bootstrap.connect(&RoomId::new("doc1")).await.unwrap();
        assert_eq!(phase, SessionPhase::Failed);
        assert_eq!(bootstrap.state().error_message(), Some(AUTH_FAILED_MESSAGE));
        assert!(bootstrap.state().token().is_none());
    }

    #[tokio::test]
    async fn test_retry_after_failure_can_succeed() {
        let endpoint = Arc::new(SwitchableEndpoint {
            healthy: Mutex::new(false),
        });
        let mut bootstrap = bootstrap(endpoint.clone());

        bootstrap.connect(&RoomId::new("doc1")).await.unwrap();
        assert_eq!(bootstrap.state().phase(), SessionPhase::Failed);

        // Backend recovers; the manual retry re-enters Authenticating
        *endpoint.healthy.lock().unwrap() = true;
        let phase = bootstrap.retry(&RoomId::new("doc1")).await.unwrap();
        assert_eq!(phase, SessionPhase::Authenticated);
    }

    #[tokio::test]
    async fn test_retry_is_rejected_unless_failed() {
        let endpoint = Arc::new(SwitchableEndpoint {
            healthy: Mutex::new(true),
        });
        let mut bootstrap = bootstrap(endpoint);

        let err = bootstrap.retry(&RoomId::new("doc1")).await.unwrap_err();
        assert_eq!(
            err,
            SessionStateError::InvalidTransition {
                action: "retry",
                phase: SessionPhase::Idle,
            }
        );

        bootstrap.connect(&RoomId::new("doc1")).await.unwrap();
        assert!(bootstrap.retry(&RoomId::new("doc1")).await.is_err());
    }
}
