//! SQLite storage backend implementation.
//!
//! Implements [`BirthdayRepository`](birthdays_core::storage::BirthdayRepository)
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async
//! wrapping.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
