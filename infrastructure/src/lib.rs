//! Infrastructure layer for docroom
//!
//! Adapters implementing the application ports: reqwest-backed HTTP clients
//! for the auth endpoint, participant directory, and document store; the
//! dependency probes behind the health aggregator; figment-based
//! configuration; and a scoped guard for externally spawned processes.

pub mod config;
pub mod http;
pub mod probes;
pub mod process;

pub use config::{Config, ConfigLoader};
pub use http::{HttpAuthEndpoint, HttpDocumentStore, HttpParticipantDirectory};
pub use probes::{IdentityProviderProbe, StorageProbe, TransportProbe, default_probes};
pub use process::{ProcessError, ScopedProcess};
