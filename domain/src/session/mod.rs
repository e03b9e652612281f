//! Session bootstrap state machine
//!
//! Explicit state for joining a room, replacing ad-hoc UI flags:
//!
//! ```text
//! Idle -> Authenticating -> Authenticated
//!                        -> Failed -> Authenticating (retry)
//! ```
//!
//! Transitions that don't fit the diagram are rejected with
//! [`SessionStateError`] rather than silently accepted.

use crate::collab::value_objects::SessionToken;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Phase of the session bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No bootstrap attempted yet
    #[default]
    Idle,
    /// Token negotiation in flight (including retries)
    Authenticating,
    /// Token issued; the collaboration transport can be initialized
    Authenticated,
    /// All attempts exhausted; a manual retry is offered
    Failed,
}

impl SessionPhase {
    pub fn as_str(&self) -> &str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Authenticating => "authenticating",
            SessionPhase::Authenticated => "authenticated",
            SessionPhase::Failed => "failed",
        }
    }

    /// Phases from which a new authentication may start
    pub fn can_authenticate(&self) -> bool {
        matches!(self, SessionPhase::Idle | SessionPhase::Failed)
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Invalid use of the session state machine
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionStateError {
    #[error("cannot {action} while session is {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: SessionPhase,
    },
}

/// State owned by the session bootstrap.
///
/// Holds the current phase plus the token (once authenticated) or the
/// user-facing failure message (once failed). The failure message is a
/// recoverable condition to surface alongside a retry action, never a crash.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    phase: SessionPhase,
    token: Option<SessionToken>,
    error: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Token of an authenticated session
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// User-facing message of a failed bootstrap
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enter `Authenticating` from `Idle` or `Failed`.
    ///
    /// Clears any previous failure message so a retry starts clean.
    pub fn begin_authentication(&mut self) -> Result<(), SessionStateError> {
        if !self.phase.can_authenticate() {
            return Err(SessionStateError::InvalidTransition {
                action: "begin authentication",
                phase: self.phase,
            });
        }
        self.phase = SessionPhase::Authenticating;
        self.error = None;
        Ok(())
    }

    /// Record a successful token negotiation.
    pub fn complete(&mut self, token: SessionToken) -> Result<(), SessionStateError> {
        if self.phase != SessionPhase::Authenticating {
            return Err(SessionStateError::InvalidTransition {
                action: "complete authentication",
                phase: self.phase,
            });
        }
        self.phase = SessionPhase::Authenticated;
        self.token = Some(token);
        Ok(())
    }

    /// Record an exhausted bootstrap with a user-facing message.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), SessionStateError> {
        if self.phase != SessionPhase::Authenticating {
            return Err(SessionStateError::InvalidTransition {
                action: "fail authentication",
                phase: self.phase,
            });
        }
        self.phase = SessionPhase::Failed;
        self.error = Some(message.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        let mut state = SessionState::new();
        assert_eq!(state.phase(), SessionPhase::Idle);

        state.begin_authentication().unwrap();
        assert_eq!(state.phase(), SessionPhase::Authenticating);

        state.complete(SessionToken::new("tok")).unwrap();
        assert_eq!(state.phase(), SessionPhase::Authenticated);
        assert!(state.token().is_some());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn test_failed_then_retry() {
        let mut state = SessionState::new();
        state.begin_authentication().unwrap();
        state.fail("Failed to authenticate. Please retry.").unwrap();
        assert_eq!(state.phase(), SessionPhase::Failed);
        assert_eq!(
            state.error_message(),
            Some("Failed to authenticate. Please retry.")
        );

        // Retry re-enters Authenticating and clears the message
        state.begin_authentication().unwrap();
        assert_eq!(state.phase(), SessionPhase::Authenticating);
        assert!(state.error_message().is_none());
    }

    #[test]
    fn test_cannot_reauthenticate_while_authenticated() {
        let mut state = SessionState::new();
        state.begin_authentication().unwrap();
        state.complete(SessionToken::new("tok")).unwrap();

        let err = state.begin_authentication().unwrap_err();
        assert_eq!(
            err,
            SessionStateError::InvalidTransition {
                action: "begin authentication",
                phase: SessionPhase::Authenticated,
            }
        );
    }

    #[test]
    fn test_complete_requires_authenticating() {
        let mut state = SessionState::new();
        assert!(state.complete(SessionToken::new("tok")).is_err());
        assert!(state.fail("boom").is_err());
    }
}
