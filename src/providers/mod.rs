//! Repository provider implementations.
//!
//! * [`InMemoryRepository`] - Thread-safe in-memory page store for testing,
//!   demos and small static collections. It also serves as a reference for
//!   writing custom [`RepositoryProvider`](crate::provider::RepositoryProvider)
//!   implementations.

pub mod in_memory;

pub use in_memory::{InMemoryError, InMemoryRepository, Page};
