//! Data-access layer for birthday records.
//!
//! [`BirthdayStore`] is the entry point: it lists, creates and deletes
//! birthdays through an injected [`BirthdayRepository`] backend. Backends are
//! selected at compile time via feature flags (see [`storage`]).

pub mod config;
pub mod storage;
pub mod store;
pub mod telemetry;

pub use birthdays_core::birthday::{Birthday, BirthdayList, NewBirthday};
pub use birthdays_core::storage::{BirthdayRepository, RepositoryError, Result};
pub use config::Config;
pub use store::BirthdayStore;
