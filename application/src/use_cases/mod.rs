//! Use cases driving the collaboration session core

pub mod authenticate_session;
pub mod health_check;
pub mod identity_cache;
pub mod resolver_bridge;
pub mod session_bootstrap;
