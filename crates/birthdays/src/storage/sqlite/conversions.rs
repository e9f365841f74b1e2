//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! A row that is missing a required value or holds a malformed one fails
//! with a conversion error instead of being coerced.

use birthdays_core::birthday::Birthday;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::Row;
use uuid::Uuid;

/// Convert a SQLite row to a Birthday.
///
/// Expected columns: id, name, date, user_id
pub fn row_to_birthday(row: &Row) -> rusqlite::Result<Birthday> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let date: String = row.get(2)?;
    let user_id: String = row.get(3)?;

    Ok(Birthday {
        id: parse_uuid(0, &id)?,
        name,
        date: parse_date(2, &date)?,
        user_id,
    })
}

/// Convert a single-column row holding a birthday ID.
pub fn row_to_id(row: &Row) -> rusqlite::Result<Uuid> {
    let id: String = row.get(0)?;
    parse_uuid(0, &id)
}

/// Format a NaiveDate for SQLite storage (YYYY-MM-DD).
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_uuid(column: usize, s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

/// Parse a date from ISO 8601 string (YYYY-MM-DD).
fn parse_date(column: usize, s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(1815, 12, 10).unwrap();
        assert_eq!(format_date(&date), "1815-12-10");
    }

    #[test]
    fn test_format_date_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(&date), "2024-01-05");
    }

    #[test]
    fn test_parse_uuid_valid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let result = parse_uuid(0, uuid_str);
        assert_eq!(result.unwrap().to_string(), uuid_str);
    }

    #[test]
    fn test_parse_uuid_invalid() {
        let result = parse_uuid(0, "not-a-uuid");
        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(0, Type::Text, _))
        ));
    }

    #[test]
    fn test_parse_date_valid() {
        let result = parse_date(2, "1906-12-09");
        assert_eq!(
            result.unwrap(),
            NaiveDate::from_ymd_opt(1906, 12, 9).unwrap()
        );
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date(2, "12/09/1906").is_err());
        assert!(parse_date(2, "1906-02-30").is_err());
        assert!(matches!(
            parse_date(2, ""),
            Err(rusqlite::Error::FromSqlConversionFailure(2, Type::Text, _))
        ));
    }
}
