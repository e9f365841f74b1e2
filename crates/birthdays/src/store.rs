//! The birthday store façade.
//!
//! [`BirthdayStore`] wraps an injected [`BirthdayRepository`] and exposes the
//! three application-level operations. It holds no state of its own: every
//! call is a single round trip to the backend, and backend failures are
//! returned to the caller as they are.

use std::sync::Arc;

use uuid::Uuid;

use birthdays_core::birthday::{Birthday, BirthdayList, NewBirthday};
use birthdays_core::storage::{BirthdayRepository, Result};

#[cfg(feature = "sqlite")]
use crate::config::Config;

/// Application-facing access to birthday records.
///
/// Cheap to clone; clones share the same backend handle.
#[derive(Clone)]
pub struct BirthdayStore {
    repository: Arc<dyn BirthdayRepository>,
}

impl BirthdayStore {
    /// Creates a store over an already initialized backend.
    pub fn new(repository: Arc<dyn BirthdayRepository>) -> Self {
        Self { repository }
    }

    /// Opens the SQLite database named by `config`, creating the schema if
    /// needed. Call once on process start.
    #[cfg(feature = "sqlite")]
    pub async fn open(config: &Config) -> Result<Self> {
        let repository = crate::storage::SqliteRepository::new(&config.database_path).await?;
        tracing::info!(path = %config.database_path, "Birthday store opened");
        Ok(Self::new(Arc::new(repository)))
    }

    /// Creates a store backed by process memory.
    #[cfg(feature = "inmemory")]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(crate::storage::InMemoryRepository::new()))
    }

    /// Gets every birthday owned by `owner_id`. Order is unspecified.
    pub async fn get_birthdays(&self, owner_id: &str) -> Result<BirthdayList> {
        let birthdays = self
            .repository
            .list_birthdays(owner_id)
            .await
            .inspect_err(|err| {
                tracing::error!(owner_id, error = %err, "Failed to list birthdays");
            })?;

        tracing::debug!(owner_id, count = birthdays.len(), "Listed birthdays");
        Ok(BirthdayList::new(birthdays))
    }

    /// Stores a new birthday and returns it as persisted, including the
    /// backend-assigned ID.
    pub async fn add_birthday(&self, birthday: NewBirthday) -> Result<Birthday> {
        let stored = self
            .repository
            .insert_birthday(&birthday)
            .await
            .inspect_err(|err| {
                tracing::error!(user_id = %birthday.user_id, error = %err, "Failed to add birthday");
            })?;

        tracing::debug!(id = %stored.id, user_id = %stored.user_id, "Added birthday");
        Ok(stored)
    }

    /// Permanently deletes the birthday with the given ID.
    ///
    /// Ownership is not checked here; callers must authorize first. Returns
    /// `None` when nothing matched, which makes repeated deletes a no-op.
    pub async fn delete_birthday(&self, id: Uuid) -> Result<Option<Uuid>> {
        let deleted = self
            .repository
            .delete_birthday(id)
            .await
            .inspect_err(|err| {
                tracing::error!(%id, error = %err, "Failed to delete birthday");
            })?;

        match deleted {
            Some(_) => tracing::debug!(%id, "Deleted birthday"),
            None => tracing::debug!(%id, "No birthday to delete"),
        }
        Ok(deleted)
    }

    /// Releases the backend. Call once on shutdown.
    pub async fn close(&self) -> Result<()> {
        self.repository.close().await?;
        tracing::info!("Birthday store closed");
        Ok(())
    }
}
