//! SQLite repository implementation.
//!
//! Implements the repository trait from `birthdays_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use birthdays_core::birthday::{Birthday, NewBirthday};
use birthdays_core::storage::{BirthdayRepository, RepositoryError, Result};

use super::conversions::{format_date, row_to_birthday, row_to_id};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Statements run on the connection's dedicated thread and are awaited from
/// async code. Cloning shares the same connection.
#[derive(Clone)]
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path, "Opened SQLite birthday store");
        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl BirthdayRepository for SqliteRepository {
    async fn list_birthdays(&self, user_id: &str) -> Result<Vec<Birthday>> {
        let user_id = user_id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_BIRTHDAYS_BY_USER)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([&user_id], row_to_birthday)
                    .map_err(wrap_err)?;

                let mut birthdays = Vec::new();
                for row_result in rows {
                    birthdays.push(row_result.map_err(wrap_err)?);
                }
                Ok(birthdays)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn insert_birthday(&self, birthday: &NewBirthday) -> Result<Birthday> {
        let name = birthday.name.clone();
        let date = format_date(&birthday.date);
        let user_id = birthday.user_id.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::INSERT_BIRTHDAY).map_err(wrap_err)?;
                let stored = stmt
                    .query_row(rusqlite::params![name, date, user_id], row_to_birthday)
                    .map_err(wrap_err)?;
                Ok(stored)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn delete_birthday(&self, id: Uuid) -> Result<Option<Uuid>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::DELETE_BIRTHDAY).map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_id) {
                    Ok(deleted) => Ok(Some(deleted)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn close(&self) -> Result<()> {
        self.conn
            .clone()
            .close()
            .await
            .map_err(map_tokio_rusqlite_error)?;

        tracing::debug!("Closed SQLite birthday store");
        Ok(())
    }
}
