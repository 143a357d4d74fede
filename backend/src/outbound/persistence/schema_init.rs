//! Idempotent creation of the `users` table at startup.

use diesel_async::SimpleAsyncConnection;
use tracing::info;

use super::pool::{DbPool, PoolError};

/// DDL for the users table. `IF NOT EXISTS` makes repeated startups a no-op.
pub const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (\
    id SERIAL PRIMARY KEY, \
    name VARCHAR(100) NOT NULL, \
    email VARCHAR(100) UNIQUE NOT NULL\
)";

/// Errors raised while ensuring the schema exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// No connection could be borrowed from the pool.
    #[error("schema initialisation could not connect: {0}")]
    Connection(#[from] PoolError),

    /// The database rejected the DDL, e.g. for lack of privileges.
    #[error("schema statement failed: {message}")]
    Statement { message: String },
}

/// Ensure the `users` table exists. Safe to call on every startup.
///
/// # Errors
///
/// [`SchemaError::Connection`] when the pool cannot supply a connection and
/// [`SchemaError::Statement`] on a database-level failure.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), SchemaError> {
    let mut conn = pool.acquire().await?;
    conn.batch_execute(CREATE_USERS_TABLE)
        .await
        .map_err(|err| SchemaError::Statement {
            message: err.to_string(),
        })?;
    info!(table = "users", "database schema ensured");
    Ok(())
}
