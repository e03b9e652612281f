//! Collaboration domain types

pub mod entities;
pub mod value_objects;

pub use entities::{Participant, RoomSummary};
pub use value_objects::{ParticipantId, RoomId, SessionToken};
