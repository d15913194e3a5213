//! forge
//!
//! Abstraction for the remote forge hosting the repository.
//!
//! # Architecture
//!
//! The `Forge` trait defines the two questions the changelog pipeline asks
//! of a hosting service: where the repository lives on the web, and which
//! pull requests have been closed. The pipeline is generic over the trait so
//! it can run against [`mock::MockForge`] in tests.
//!
//! # Modules
//!
//! - `traits`: Core `Forge` trait and response types
//! - [`github`]: GitHub implementation using the REST API
//! - [`mock`]: Mock implementation for deterministic testing

pub mod github;
pub mod mock;
mod traits;

pub use traits::*;
