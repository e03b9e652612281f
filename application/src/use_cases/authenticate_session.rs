//! Session token negotiation with bounded retries and linear backoff.
//!
//! Each call is independent: no state is shared across calls, and concurrent
//! authentication for different rooms is safe. Transient failures are logged
//! and retried; only exhaustion reaches the caller, as the single
//! user-visible failure mode of the whole core.

use crate::ports::auth_endpoint::{AuthAttemptError, AuthEndpoint};
use docroom_domain::{RoomId, SessionToken};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Default number of attempts before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default base delay between attempts
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Terminal outcomes of [`SessionAuthenticator::authenticate`]
#[derive(Error, Debug)]
pub enum AuthenticateError {
    /// All attempts spent. Surface this as a recoverable condition with a
    /// manual retry action, not a crash.
    #[error("authentication failed after {attempts} attempts: {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: AuthAttemptError,
    },

    /// The caller abandoned the call during a backoff wait
    #[error("authentication cancelled")]
    Cancelled,
}

impl AuthenticateError {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, AuthenticateError::Exhausted { .. })
    }
}

/// Negotiates a session token for a room against the auth endpoint.
pub struct SessionAuthenticator {
    endpoint: Arc<dyn AuthEndpoint>,
    max_attempts: u32,
    base_delay: Duration,
    cancellation_token: Option<CancellationToken>,
}

impl SessionAuthenticator {
    pub fn new(endpoint: Arc<dyn AuthEndpoint>) -> Self {
        Self {
            endpoint,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
            cancellation_token: None,
        }
    }

    /// Override the retry policy. `max_attempts` is clamped to at least 1.
    pub fn with_policy(mut self, max_attempts: u32, base_delay: Duration) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.base_delay = base_delay;
        self
    }

    /// Attach a cancellation token that aborts backoff waits.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Negotiate a token for `room`.
    ///
    /// Attempt `k` failing (for `k < max_attempts`) is followed by a wait of
    /// `base_delay * k` — linear backoff, not exponential. Failure of the
    /// final attempt returns immediately with no trailing wait. The first
    /// success discards all prior failures.
    pub async fn authenticate(&self, room: &RoomId) -> Result<SessionToken, AuthenticateError> {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            debug!("authenticating room {} (attempt {}/{})", room, attempt, self.max_attempts);

            match self.endpoint.request_token(room).await {
                Ok(token) => {
                    info!("room {} authenticated on attempt {}", room, attempt);
                    return Ok(token);
                }
                Err(e) => {
                    warn!(
                        "authentication attempt {}/{} for room {} failed: {}",
                        attempt, self.max_attempts, room, e
                    );
                    if attempt >= self.max_attempts {
                        return Err(AuthenticateError::Exhausted {
                            attempts: attempt,
                            source: e,
                        });
                    }
                    self.backoff(self.base_delay * attempt).await?;
                }
            }
        }
    }

    async fn backoff(&self, delay: Duration) -> Result<(), AuthenticateError> {
        match &self.cancellation_token {
            Some(token) => {
                tokio::select! {
                    _ = token.cancelled() => Err(AuthenticateError::Cancelled),
                    _ = tokio::time::sleep(delay) => Ok(()),
                }
            }
            None => {
                tokio::time::sleep(delay).await;
                Ok(())
            }
        }
    }
}
