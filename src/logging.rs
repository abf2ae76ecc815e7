//! Logging initialization.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `PROFILE_PAGE_LOG` environment variable, falling back to `info`.
//!
//! ```bash
//! PROFILE_PAGE_LOG=profile_page=debug profile-page
//! ```

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "PROFILE_PAGE_LOG";

/// Builds the filter from [`LOG_ENV`], or `info` when unset or invalid.
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the tracing subscriber. Logs go to stderr.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init() {
    fmt()
        .with_env_filter(filter_from_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // The filter reads process-wide state, so tests touching it run one at a time.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_log_env<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let saved = std::env::var(LOG_ENV).ok();
        match value {
            Some(value) => std::env::set_var(LOG_ENV, value),
            None => std::env::remove_var(LOG_ENV),
        }
        let result = f();
        match saved {
            Some(saved) => std::env::set_var(LOG_ENV, saved),
            None => std::env::remove_var(LOG_ENV),
        }
        result
    }

    #[test]
    fn valid_level_is_honored() {
        let filter = with_log_env(Some("debug"), filter_from_env);
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn module_directive_is_honored() {
        let filter = with_log_env(Some("profile_page=trace,warn"), filter_from_env);
        assert_eq!(
            filter.to_string(),
            EnvFilter::new("profile_page=trace,warn").to_string()
        );
        assert_ne!(filter.to_string(), "info");
    }

    #[test]
    fn unset_falls_back_to_info() {
        let filter = with_log_env(None, filter_from_env);
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn invalid_value_falls_back_to_info() {
        let filter = with_log_env(Some("profile_page=loudest"), filter_from_env);
        assert_eq!(filter.to_string(), "info");
    }
}
