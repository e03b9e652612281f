//! Document store port

use async_trait::async_trait;
use docroom_domain::{RoomId, RoomSummary};
use thiserror::Error;

/// Errors from the document metadata collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentStoreError {
    #[error("document store returned HTTP {0}")]
    HttpStatus(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed document store response: {0}")]
    InvalidResponse(String),

    #[error("document store endpoint not configured")]
    NotConfigured,
}

/// Batch lookup of room display metadata.
///
/// Ids without a backing document are omitted from the result, not errored;
/// absence is an expected outcome.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn room_summaries(&self, ids: &[RoomId]) -> Result<Vec<RoomSummary>, DocumentStoreError>;
}
