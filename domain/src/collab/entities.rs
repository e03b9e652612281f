//! Collaboration domain entities

use super::value_objects::{ParticipantId, RoomId};
use serde::{Deserialize, Serialize};

/// A known collaborator.
///
/// Immutable snapshot fetched once per session bootstrap; the full set is
/// replaced wholesale on refresh, never partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier
    pub id: ParticipantId,
    /// Name shown in presence indicators and mention suggestions
    pub display_name: String,
    /// Avatar image URL
    pub avatar_url: String,
    /// Cursor/selection color assigned to this participant
    pub color: String,
}

impl Participant {
    pub fn new(
        id: impl Into<ParticipantId>,
        display_name: impl Into<String>,
        avatar_url: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            avatar_url: avatar_url.into(),
            color: color.into(),
        }
    }

    /// Case-insensitive substring match on the display name.
    ///
    /// An empty query matches every participant.
    pub fn name_matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.display_name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Display metadata for a room, resolved on demand.
///
/// Derived and read-only; never cached beyond a single resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub id: RoomId,
    pub display_name: String,
}

impl RoomSummary {
    pub fn new(id: impl Into<RoomId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anna() -> Participant {
        Participant::new("u1", "Anna", "https://example.com/a.png", "#ff0000")
    }

    #[test]
    fn test_name_matches_is_case_insensitive() {
        assert!(anna().name_matches("an"));
        assert!(anna().name_matches("ANNA"));
        assert!(!anna().name_matches("bob"));
    }

    #[test]
    fn test_name_matches_is_substring_not_prefix() {
        // Upstream product semantics: substring, not prefix.
        assert!(anna().name_matches("nna"));
    }

    #[test]
    fn test_empty_query_matches_everyone() {
        assert!(anna().name_matches(""));
    }
}
