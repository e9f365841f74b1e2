//! Tracing subscriber setup for binaries and embedding applications.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to `default_filter`
/// (e.g. `"birthdays=debug"`). Fails if a subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails_instead_of_panicking() {
        let _ = init_tracing("birthdays=debug");

        assert!(init_tracing("birthdays=debug").is_err());
    }
}
