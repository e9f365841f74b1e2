//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! [`BirthdayRepository`](birthdays_core::storage::BirthdayRepository) trait.
//! Backends are selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory` (default): HashMap-backed storage for tests and development
//!
//! # Examples
//!
//! Build with SQLite only:
//! ```bash
//! cargo build -p birthdays --no-default-features --features sqlite
//! ```

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;
