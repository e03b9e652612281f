//! Domain layer for docroom
//!
//! This crate contains the core types of the collaboration session core.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Room
//!
//! The addressable unit of a collaborative session. A room maps 1:1 to a
//! document; joining a room requires a [`SessionToken`] issued by the
//! collaboration transport's auth endpoint.
//!
//! ## Participant
//!
//! An immutable snapshot of a known collaborator, fetched once per session
//! bootstrap and replaced wholesale on refresh.
//!
//! ## Probe
//!
//! One independent health check of a single backend dependency. Probes are
//! request-scoped: created `Unknown`, resolved exactly once, discarded with
//! the report.

pub mod collab;
pub mod health;
pub mod session;

// Re-export commonly used types
pub use collab::{
    entities::{Participant, RoomSummary},
    value_objects::{ParticipantId, RoomId, SessionToken},
};
pub use health::{DependencyProbe, HealthReport, ProbeStatus};
pub use session::{SessionPhase, SessionState, SessionStateError};
