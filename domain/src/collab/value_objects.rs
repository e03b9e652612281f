//! Collaboration value objects - immutable identifiers and credentials.
//!
//! # Identifiers
//! - [`ParticipantId`] - Unique identifier for a collaborator
//! - [`RoomId`] - Identifier of a collaborative room (maps 1:1 to a document)
//!
//! # Credentials
//! - [`SessionToken`] - Opaque credential issued by the auth endpoint

use serde::{Deserialize, Serialize};

/// Unique identifier for a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Creates a ParticipantId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for ParticipantId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a collaborative room.
///
/// A room addresses one collaborative session and maps 1:1 to a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Creates a RoomId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for RoomId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque session credential issued by the auth endpoint for one room.
///
/// The core assumes no internal structure; expiry is enforced by the
/// collaboration transport. `Debug` and `Display` redact the value so the
/// token never leaks into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a raw token value.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw credential for handing to the collaboration transport.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionToken(..)")
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<session token>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_id_roundtrip() {
        let id = ParticipantId::new("user_42");
        assert_eq!(id.as_str(), "user_42");
        assert_eq!(id.to_string(), "user_42");
    }

    #[test]
    fn test_room_id_from_str() {
        let id: RoomId = "doc_abc".into();
        assert_eq!(id.as_str(), "doc_abc");
    }

    #[test]
    fn test_session_token_is_redacted_in_debug_and_display() {
        let token = SessionToken::new("s3cr3t");
        assert!(!format!("{:?}", token).contains("s3cr3t"));
        assert!(!token.to_string().contains("s3cr3t"));
        assert_eq!(token.expose(), "s3cr3t");
    }
}
