//! HTTP adapters for the application ports

pub mod auth;
pub mod directory;
pub mod documents;

pub use auth::HttpAuthEndpoint;
pub use directory::HttpParticipantDirectory;
pub use documents::HttpDocumentStore;
