//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use birthdays_core::birthday::{Birthday, NewBirthday};
use birthdays_core::storage::{BirthdayRepository, Result};

/// In-memory storage backend for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    birthdays: Arc<RwLock<HashMap<Uuid, Birthday>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            birthdays: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored birthdays across all owners.
    pub async fn len(&self) -> usize {
        self.birthdays.read().await.len()
    }

    /// Returns true if no birthdays are stored for any owner.
    pub async fn is_empty(&self) -> bool {
        self.birthdays.read().await.is_empty()
    }
}

#[async_trait]
impl BirthdayRepository for InMemoryRepository {
    async fn list_birthdays(&self, user_id: &str) -> Result<Vec<Birthday>> {
        let birthdays = self.birthdays.read().await;
        Ok(birthdays
            .values()
            .filter(|b| b.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn insert_birthday(&self, birthday: &NewBirthday) -> Result<Birthday> {
        let mut birthdays = self.birthdays.write().await;
        let mut id = Uuid::new_v4();
        while birthdays.contains_key(&id) {
            id = Uuid::new_v4();
        }
        let stored = birthday.clone().into_birthday(id);
        birthdays.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_birthday(&self, id: Uuid) -> Result<Option<Uuid>> {
        let mut birthdays = self.birthdays.write().await;
        Ok(birthdays.remove(&id).map(|b| b.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_keeps_fields() {
        let repo = InMemoryRepository::new();
        let input = NewBirthday::new("Ada", date(1815, 12, 10), "u1");

        let stored = repo.insert_birthday(&input).await.unwrap();

        assert!(!stored.id.is_nil());
        assert_eq!(stored.name, "Ada");
        assert_eq!(stored.date, date(1815, 12, 10));
        assert_eq!(stored.user_id, "u1");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_identical_inputs_produce_independent_records() {
        let repo = InMemoryRepository::new();
        let input = NewBirthday::new("Ada", date(1815, 12, 10), "u1");

        let first = repo.insert_birthday(&input).await.unwrap();
        let second = repo.insert_birthday(&input).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.list_birthdays("u1").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_filters_by_owner() {
        let repo = InMemoryRepository::new();
        repo.insert_birthday(&NewBirthday::new("Ada", date(1815, 12, 10), "u1"))
            .await
            .unwrap();
        repo.insert_birthday(&NewBirthday::new("Grace", date(1906, 12, 9), "u2"))
            .await
            .unwrap();

        let u1 = repo.list_birthdays("u1").await.unwrap();

        assert_eq!(u1.len(), 1);
        assert_eq!(u1[0].name, "Ada");
        assert!(repo.list_birthdays("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_id_once() {
        let repo = InMemoryRepository::new();
        let stored = repo
            .insert_birthday(&NewBirthday::new("Ada", date(1815, 12, 10), "u1"))
            .await
            .unwrap();

        assert_eq!(
            repo.delete_birthday(stored.id).await.unwrap(),
            Some(stored.id)
        );
        assert_eq!(repo.delete_birthday(stored.id).await.unwrap(), None);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_leaves_store_untouched() {
        let repo = InMemoryRepository::new();
        repo.insert_birthday(&NewBirthday::new("Ada", date(1815, 12, 10), "u1"))
            .await
            .unwrap();

        let result = repo.delete_birthday(Uuid::new_v4()).await.unwrap();

        assert!(result.is_none());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryRepository::new();
        let clone = repo.clone();

        clone
            .insert_birthday(&NewBirthday::new("Ada", date(1815, 12, 10), "u1"))
            .await
            .unwrap();

        assert_eq!(repo.list_birthdays("u1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_close_is_a_no_op() {
        let repo = InMemoryRepository::new();

        repo.close().await.unwrap();
        assert!(repo.list_birthdays("u1").await.unwrap().is_empty());
    }
}
