use std::env;

/// Default SQLite database file.
const DEFAULT_DATABASE_PATH: &str = "birthdays.db";

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to SQLite database file (default: "birthdays.db")
    pub database_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BIRTHDAYS_DATABASE_PATH` - SQLite database path (default: "birthdays.db")
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("BIRTHDAYS_DATABASE_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string()),
        }
    }

    /// Overrides the database path.
    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database_path = path.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_and_defaults() {
        env::set_var("BIRTHDAYS_DATABASE_PATH", "/var/lib/birthdays/data.db");
        assert_eq!(
            Config::from_env().database_path,
            "/var/lib/birthdays/data.db"
        );

        env::set_var("BIRTHDAYS_DATABASE_PATH", "  ");
        assert_eq!(Config::from_env().database_path, "birthdays.db");

        env::remove_var("BIRTHDAYS_DATABASE_PATH");
        assert_eq!(Config::from_env().database_path, "birthdays.db");
        assert_eq!(Config::default(), Config::from_env());
    }

    #[test]
    fn test_with_database_path() {
        let config = Config {
            database_path: "birthdays.db".to_string(),
        }
        .with_database_path(":memory:");

        assert_eq!(config.database_path, ":memory:");
    }
}
