//! Database connection management

use sqlx::{ConnectOptions, PgPool};

pub use sqlx::postgres::PgConnectOptions;

/// Enable or silence per-statement query logging.
///
/// Logged statements are emitted through `tracing` under the `sqlx::query`
/// target.
#[must_use]
pub fn with_statement_logging(options: PgConnectOptions, enabled: bool) -> PgConnectOptions {
    if enabled {
        options
    } else {
        options.disable_statement_logging()
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(options: PgConnectOptions) -> Result<PgPool, sqlx::Error> {
    PgPool::connect_with(options).await
}
