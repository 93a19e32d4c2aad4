use std::env;
use std::time::Duration;

const DEFAULT_INTERVAL_SECONDS: u64 = 60;
const DEFAULT_MAX_AGE_MINUTES: i64 = 10;

/// Schedule of the expired-call sweep
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    pub interval: Duration,
    pub max_age: chrono::Duration,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECONDS),
            max_age: chrono::Duration::minutes(DEFAULT_MAX_AGE_MINUTES),
        }
    }
}

impl CleanupConfig {
    /// Load cleanup configuration from environment variables
    ///
    /// Environment variables:
    /// - CLEANUP_INTERVAL_SECONDS: Seconds between sweeps (default: 60)
    /// - CALL_MAX_AGE_MINUTES: Age after which a call is removed (default: 10)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("CLEANUP_INTERVAL_SECONDS").ok().as_deref(),
            env::var("CALL_MAX_AGE_MINUTES").ok().as_deref(),
        )
    }

    fn from_values(interval: Option<&str>, max_age: Option<&str>) -> Self {
        let interval = positive(interval, "CLEANUP_INTERVAL_SECONDS")
            .unwrap_or(DEFAULT_INTERVAL_SECONDS);
        let max_age =
            positive(max_age, "CALL_MAX_AGE_MINUTES").unwrap_or(DEFAULT_MAX_AGE_MINUTES as u64);

        Self {
            interval: Duration::from_secs(interval),
            max_age: chrono::Duration::minutes(max_age as i64),
        }
    }
}

fn positive(raw: Option<&str>, name: &str) -> Option<u64> {
    let raw = raw?;
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            tracing::warn!("Ignoring invalid {name}={raw:?}, using default");
            None
        }
    }
}
