//! Ports (interfaces) for external dependencies
//!
//! Each port defines how the application layer talks to one collaborator.
//! Implementations (adapters) live in the infrastructure layer.

pub mod auth_endpoint;
pub mod dependency_check;
pub mod directory;
pub mod document_store;
pub mod resolver;
