//! Resolver ports consumed by the collaboration transport
//!
//! The transport invokes these callbacks to decorate presence, mentions, and
//! room references. Missing identities are normal, expected outcomes: they
//! come back as `None` or are omitted, never as errors.

use super::document_store::DocumentStoreError;
use async_trait::async_trait;
use docroom_domain::{Participant, ParticipantId, RoomId, RoomSummary};

/// Identity lookups for presence and mentions.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve participants positionally: the result has the same length and
    /// order as `ids`, with `None` marking an id nothing is known about.
    async fn resolve_users(&self, ids: &[ParticipantId]) -> Vec<Option<Participant>>;

    /// Participant ids whose display name matches the mention query
    /// (case-insensitive substring; empty query means everyone).
    async fn resolve_mention_candidates(&self, query: &str) -> Vec<ParticipantId>;
}

/// Room display metadata lookups.
#[async_trait]
pub trait RoomResolver: Send + Sync {
    /// Resolve summaries for a set of rooms. Every id with a backing document
    /// appears exactly once; ids without one are omitted. Result order need
    /// not match input order.
    async fn resolve_room_summaries(
        &self,
        ids: &[RoomId],
    ) -> Result<Vec<RoomSummary>, DocumentStoreError>;
}
