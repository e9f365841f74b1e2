//! In-memory storage backend for testing.
//!
//! Stores all birthdays in a HashMap wrapped in `Arc<RwLock<_>>`. Useful for
//! tests and development where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use birthdays::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
