//! Read-mostly cache of the known collaborator set.
//!
//! The snapshot is replaced atomically on refresh: readers clone the `Arc`
//! and never observe a partially-updated set, so no finer locking is needed.
//! A failed refresh is reported to the caller but leaves the previous
//! snapshot in place — stale-but-available beats empty.

use crate::ports::directory::{DirectoryError, ParticipantDirectory};
use docroom_domain::{Participant, ParticipantId};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Holds the current set of collaborators and answers lookup/filter queries.
pub struct IdentityCache {
    directory: Arc<dyn ParticipantDirectory>,
    snapshot: RwLock<Arc<Vec<Participant>>>,
}

impl IdentityCache {
    /// Create an empty cache backed by the given directory.
    pub fn new(directory: Arc<dyn ParticipantDirectory>) -> Self {
        Self {
            directory,
            snapshot: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Fetch the full participant set and replace the snapshot wholesale.
    ///
    /// On failure the previous snapshot stays in place and the error is
    /// returned to the caller. Returns the new participant count on success.
    pub async fn refresh(&self) -> Result<usize, DirectoryError> {
        let participants = self.directory.fetch_participants().await?;
        let count = participants.len();
        *self.snapshot.write().await = Arc::new(participants);
        debug!("identity cache refreshed: {} participants", count);
        Ok(count)
    }

    /// Look up one participant by id.
    pub async fn lookup(&self, id: &ParticipantId) -> Option<Participant> {
        self.snapshot
            .read()
            .await
            .iter()
            .find(|p| &p.id == id)
            .cloned()
    }

    /// Participants whose display name matches `query`.
    ///
    /// Empty query returns the entire current set unfiltered; otherwise a
    /// case-insensitive substring match on the display name.
    pub async fn filter_by_name(&self, query: &str) -> Vec<Participant> {
        let snapshot = self.current().await;
        if query.is_empty() {
            return snapshot.as_ref().clone();
        }
        snapshot
            .iter()
            .filter(|p| p.name_matches(query))
            .cloned()
            .collect()
    }

    /// Ids of the participants whose display name matches `query`, in
    /// snapshot order. Needs nothing beyond the directory-fed snapshot.
    pub async fn mention_candidates(&self, query: &str) -> Vec<ParticipantId> {
        self.filter_by_name(query)
            .await
            .into_iter()
            .map(|p| p.id)
            .collect()
    }

    /// Consistent view of the whole set for multi-read use.
    pub async fn current(&self) -> Arc<Vec<Participant>> {
        self.snapshot.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Directory that serves a scripted sequence of responses.
    struct ScriptedDirectory {
        responses: Mutex<Vec<Result<Vec<Participant>, DirectoryError>>>,
    }

    impl ScriptedDirectory {
        fn new(responses: Vec<Result<Vec<Participant>, DirectoryError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
            }
        }
    }

    #[async_trait]
    impl ParticipantDirectory for ScriptedDirectory {
        async fn fetch_participants(&self) -> Result<Vec<Participant>, DirectoryError> {
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                return Err(DirectoryError::Transport("script exhausted".into()));
            }
            responses.remove(0)
        }
    }

    fn participants() -> Vec<Participant> {
        vec![
            Participant::new("u1", "Anna", "https://example.com/1.png", "#e11"),
            Participant::new("u2", "Andrew", "https://example.com/2.png", "#1e1"),
            Participant::new("u3", "Bob", "https://example.com/3.png", "#11e"),
        ]
    }

    #[tokio::test]
    async fn test_refresh_replaces_snapshot() {
        let cache = IdentityCache::new(Arc::new(ScriptedDirectory::new(vec![
            Ok(participants()),
            Ok(vec![Participant::new("u9", "Zoe", "", "#999")]),
        ])));

        assert_eq!(cache.refresh().await.unwrap(), 3);
        assert!(cache.lookup(&ParticipantId::new("u1")).await.is_some());

        // Second refresh replaces, not merges
        assert_eq!(cache.refresh().await.unwrap(), 1);
        assert!(cache.lookup(&ParticipantId::new("u1")).await.is_none());
        assert!(cache.lookup(&ParticipantId::new("u9")).await.is_some());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_snapshot() {
        let cache = IdentityCache::new(Arc::new(ScriptedDirectory::new(vec![
            Ok(participants()),
            Err(DirectoryError::Transport("connection reset".into())),
        ])));

        cache.refresh().await.unwrap();
        let err = cache.refresh().await.unwrap_err();
        assert_eq!(err, DirectoryError::Transport("connection reset".into()));

        // Prior snapshot still answers lookups unchanged
        let anna = cache.lookup(&ParticipantId::new("u1")).await.unwrap();
        assert_eq!(anna.display_name, "Anna");
        assert_eq!(cache.current().await.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_query_returns_full_snapshot() {
        let cache = IdentityCache::new(Arc::new(ScriptedDirectory::new(vec![Ok(participants())])));
        cache.refresh().await.unwrap();

        let all = cache.filter_by_name("").await;
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_filter_is_case_insensitive_substring() {
        let cache = IdentityCache::new(Arc::new(ScriptedDirectory::new(vec![Ok(participants())])));
        cache.refresh().await.unwrap();

        let matched = cache.filter_by_name("AN").await;
        let names: Vec<&str> = matched.iter().map(|p| p.display_name.as_str()).collect();
        assert_eq!(names, vec!["Anna", "Andrew"]);

        // Substring, not prefix: interior matches count
        let matched = cache.filter_by_name("nna").await;
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].display_name, "Anna");

        assert!(cache.filter_by_name("zzz").await.is_empty());
    }

    #[tokio::test]
    async fn test_mention_candidates_need_only_the_directory() {
        // No document store in sight: candidate ids come straight from
        // the cached participant set.
        let cache = IdentityCache::new(Arc::new(ScriptedDirectory::new(vec![Ok(participants())])));
        cache.refresh().await.unwrap();

        let ids = cache.mention_candidates("an").await;
        assert_eq!(
            ids,
            vec![ParticipantId::new("u1"), ParticipantId::new("u2")]
        );

        // Empty query suggests everyone
        assert_eq!(cache.mention_candidates("").await.len(), 3);
    }

    #[tokio::test]
    async fn test_lookup_on_empty_cache_is_a_miss() {
        let cache = IdentityCache::new(Arc::new(ScriptedDirectory::new(vec![])));
        assert!(cache.lookup(&ParticipantId::new("u1")).await.is_none());
    }
}
