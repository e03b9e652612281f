//! Participant directory port

use async_trait::async_trait;
use docroom_domain::Participant;
use thiserror::Error;

/// Errors fetching the participant set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("directory returned HTTP {0}")]
    HttpStatus(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed directory response: {0}")]
    InvalidResponse(String),

    #[error("directory endpoint not configured")]
    NotConfigured,
}

/// Source of the full set of known collaborators.
///
/// One call fetches the entire set; the cache replaces its snapshot
/// wholesale with the result.
#[async_trait]
pub trait ParticipantDirectory: Send + Sync {
    async fn fetch_participants(&self) -> Result<Vec<Participant>, DirectoryError>;
}
