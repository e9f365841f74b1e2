//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository.
//! Pure data, no I/O.

/// SQL statement to create the birthdays table.
///
/// IDs are generated by the database as random version 4 UUID strings.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS birthdays (
    id TEXT PRIMARY KEY NOT NULL DEFAULT (
        lower(hex(randomblob(4))) || '-' ||
        lower(hex(randomblob(2))) || '-4' ||
        substr(lower(hex(randomblob(2))), 2) || '-' ||
        substr('89ab', 1 + (random() & 3), 1) ||
        substr(lower(hex(randomblob(2))), 2) || '-' ||
        lower(hex(randomblob(6)))
    ),
    name TEXT NOT NULL,
    date TEXT NOT NULL,
    user_id TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_birthdays_user_id ON birthdays(user_id);
"#;

pub const INSERT_BIRTHDAY: &str = r#"
INSERT INTO birthdays (name, date, user_id)
VALUES (?1, ?2, ?3)
RETURNING id, name, date, user_id
"#;

pub const SELECT_BIRTHDAYS_BY_USER: &str = r#"
SELECT id, name, date, user_id
FROM birthdays
WHERE user_id = ?1
"#;

pub const DELETE_BIRTHDAY: &str = r#"
DELETE FROM birthdays
WHERE id = ?1
RETURNING id
"#;
