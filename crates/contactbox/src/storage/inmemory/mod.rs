//! In-memory storage backend for development and testing.
//!
//! Records live in a `HashMap` wrapped in `Arc<RwLock<_>>` and are lost when
//! the process exits.

mod repository;

pub use repository::InMemoryRepository;
