/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration: the
 * SQLite database connection and the cleanup task's schedule.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible
 * defaults for local development:
 *
 * - `DATABASE_URL` - SQLite URL (default `sqlite:inkboard.db?mode=rwc`)
 * - `BOARD_TTL_SECS` - staleness window before a board expires
 *   (default 86400, i.e. 24 hours)
 * - `CLEANUP_INTERVAL_SECS` - how often the cleanup task ticks
 *   (default 3600, i.e. hourly)
 */

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::time::Duration;

/// Default SQLite database URL for local development
const DEFAULT_DATABASE_URL: &str = "sqlite:inkboard.db?mode=rwc";

/// Default staleness window: 24 hours
const DEFAULT_BOARD_TTL_SECS: u64 = 24 * 60 * 60;

/// Default cleanup tick interval: hourly
const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 60 * 60;

/// Cleanup task schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupConfig {
    /// Duration of inactivity after which a board becomes eligible for
    /// deletion
    pub ttl: Duration,
    /// How often the periodic sweep runs
    pub interval: Duration,
}

/// Load the cleanup schedule from environment variables
///
/// Unparseable values fall back to the defaults with a warning rather than
/// failing startup.
pub fn load_cleanup_config() -> CleanupConfig {
    let ttl_secs = env_u64("BOARD_TTL_SECS", DEFAULT_BOARD_TTL_SECS);
    let interval_secs = env_u64("CLEANUP_INTERVAL_SECS", DEFAULT_CLEANUP_INTERVAL_SECS);

    CleanupConfig {
        ttl: Duration::from_secs(ttl_secs),
        interval: Duration::from_secs(interval_secs),
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(value) => value.parse::<u64>().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid {}='{}', falling back to default {}",
                name,
                value,
                default
            );
            default
        }),
        Err(_) => default,
    }
}

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment (defaulting to a local
///    SQLite file)
/// 2. Creates a SQLite connection pool
/// 3. Runs the embedded database migrations
///
/// # Errors
///
/// Unlike optional side services, the database is the whole of this
/// server's state: connection or migration failure is fatal and propagates
/// to the caller so startup aborts.
pub async fn load_database() -> Result<SqlitePool, sqlx::Error> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    tracing::info!("Connecting to database...");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cleanup_config() {
        // Only meaningful when the env vars aren't set, which is the
        // normal test environment.
        if std::env::var("BOARD_TTL_SECS").is_err()
            && std::env::var("CLEANUP_INTERVAL_SECS").is_err()
        {
            let config = load_cleanup_config();
            assert_eq!(config.ttl, Duration::from_secs(86400));
            assert_eq!(config.interval, Duration::from_secs(3600));
        }
    }
}
