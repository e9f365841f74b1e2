use async_trait::async_trait;
use uuid::Uuid;

use crate::birthday::{Birthday, NewBirthday};

use super::Result;

/// Repository for birthday records.
///
/// Every method is a single round trip to the backend. Failures are returned
/// as they happen; implementations do not retry.
#[async_trait]
pub trait BirthdayRepository: Send + Sync {
    /// Gets all birthdays owned by `user_id`, in no particular order.
    async fn list_birthdays(&self, user_id: &str) -> Result<Vec<Birthday>>;

    /// Inserts a birthday and returns the record exactly as stored,
    /// including the backend-assigned ID.
    async fn insert_birthday(&self, birthday: &NewBirthday) -> Result<Birthday>;

    /// Deletes the birthday with the given ID, whoever owns it.
    ///
    /// Returns the deleted ID, or `None` if no record matched.
    async fn delete_birthday(&self, id: Uuid) -> Result<Option<Uuid>>;

    /// Releases the backend's resources. Called once on shutdown.
    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
