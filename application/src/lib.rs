//! Application layer for docroom
//!
//! Defines the ports (interfaces) the session core depends on and the use
//! cases that drive it. Adapters for the ports live in the infrastructure
//! layer and are injected at the binary.

pub mod ports;
pub mod use_cases;

// Re-export the port traits and errors
pub use ports::{
    auth_endpoint::{AuthAttemptError, AuthEndpoint},
    dependency_check::{DependencyCheck, ProbeFailure},
    directory::{DirectoryError, ParticipantDirectory},
    document_store::{DocumentStore, DocumentStoreError},
    resolver::{IdentityResolver, RoomResolver},
};

// Re-export the use cases
pub use use_cases::{
    authenticate_session::{AuthenticateError, SessionAuthenticator},
    health_check::HealthAggregator,
    identity_cache::IdentityCache,
    resolver_bridge::ResolverBridge,
    session_bootstrap::SessionBootstrap,
};
