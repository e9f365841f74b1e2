use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked birthday owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Birthday {
    /// Assigned by the storage backend when the record is inserted.
    pub id: Uuid,
    pub name: String,
    /// Stored and returned verbatim, without timezone or recurrence semantics.
    pub date: NaiveDate,
    /// The owning user. Never changes after creation.
    pub user_id: String,
}

impl Birthday {
    /// Returns true if this birthday belongs to the given owner.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// Input for creating a birthday. The backend assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBirthday {
    pub name: String,
    pub date: NaiveDate,
    pub user_id: String,
}

impl NewBirthday {
    /// Creates a new birthday input for the given owner.
    pub fn new(name: impl Into<String>, date: NaiveDate, user_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date,
            user_id: user_id.into(),
        }
    }

    /// Attaches a backend-assigned ID, producing the persisted record.
    pub fn into_birthday(self, id: Uuid) -> Birthday {
        Birthday {
            id,
            name: self.name,
            date: self.date,
            user_id: self.user_id,
        }
    }
}

/// All birthdays of one owner, wrapped in a named field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayList {
    pub birthdays: Vec<Birthday>,
}

impl BirthdayList {
    /// Wraps the given birthdays.
    pub fn new(birthdays: Vec<Birthday>) -> Self {
        Self { birthdays }
    }

    /// Returns true if the list contains a birthday with the given ID.
    pub fn contains(&self, id: Uuid) -> bool {
        self.birthdays.iter().any(|b| b.id == id)
    }

    /// Returns true if the owner has no birthdays.
    pub fn is_empty(&self) -> bool {
        self.birthdays.is_empty()
    }

    /// Number of birthdays in the list.
    pub fn len(&self) -> usize {
        self.birthdays.len()
    }
}
