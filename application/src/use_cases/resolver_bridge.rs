//! Adapter implementing the resolver callbacks over the identity cache and
//! the document store.
//!
//! One type implements both [`IdentityResolver`] and [`RoomResolver`] so the
//! contract stays testable independent of the collaboration transport that
//! ultimately invokes it.

use crate::ports::document_store::{DocumentStore, DocumentStoreError};
use crate::ports::resolver::{IdentityResolver, RoomResolver};
use crate::use_cases::identity_cache::IdentityCache;
use async_trait::async_trait;
use docroom_domain::{Participant, ParticipantId, RoomId, RoomSummary};
use std::collections::HashSet;
use std::sync::Arc;

/// Bridges the collaboration transport's resolution callbacks onto the core.
pub struct ResolverBridge {
    cache: Arc<IdentityCache>,
    documents: Arc<dyn DocumentStore>,
}

impl ResolverBridge {
    pub fn new(cache: Arc<IdentityCache>, documents: Arc<dyn DocumentStore>) -> Self {
        Self { cache, documents }
    }
}

#[async_trait]
impl IdentityResolver for ResolverBridge {
    async fn resolve_users(&self, ids: &[ParticipantId]) -> Vec<Option<Participant>> {
        // One consistent snapshot for the whole batch; each id resolves
        // independently and misses stay positional.
        let snapshot = self.cache.current().await;
        ids.iter()
            .map(|id| snapshot.iter().find(|p| &p.id == id).cloned())
            .collect()
    }

    async fn resolve_mention_candidates(&self, query: &str) -> Vec<ParticipantId> {
        self.cache.mention_candidates(query).await
    }
}

#[async_trait]
impl RoomResolver for ResolverBridge {
    async fn resolve_room_summaries(
        &self,
        ids: &[RoomId],
    ) -> Result<Vec<RoomSummary>, DocumentStoreError> {
        // Deduplicate in first-occurrence order so each backed id appears
        // exactly once even if requested twice.
        let mut seen = HashSet::new();
        let unique: Vec<RoomId> = ids
            .iter()
            .filter(|id| seen.insert((*id).clone()))
            .cloned()
            .collect();
        if unique.is_empty() {
            return Ok(Vec::new());
        }
        self.documents.room_summaries(&unique).await
    }
}
