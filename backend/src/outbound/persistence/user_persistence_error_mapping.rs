//! Mapping from pool and Diesel failures to [`UserPersistenceError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{debug, warn};

use crate::domain::ports::UserPersistenceError;

use super::pool::PoolError;

/// Map pool errors to the connection variant.
pub(super) fn map_pool_error(error: PoolError) -> UserPersistenceError {
    warn!(%error, "user repository could not acquire a connection");
    UserPersistenceError::connection(error.to_string())
}

/// Check if message indicates a column length violation (SQLSTATE 22001),
/// which Diesel reports as an unknown kind.
fn is_length_violation(message: &str) -> bool {
    message.to_lowercase().contains("value too long")
}

/// Map Diesel errors to user persistence errors.
///
/// `email` is the address being written, reported back on unique violations.
pub(super) fn map_diesel_error(error: DieselError, email: Option<&str>) -> UserPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserPersistenceError::duplicate_email(email.unwrap_or_default())
        }
        DieselError::DatabaseError(
            DatabaseErrorKind::NotNullViolation | DatabaseErrorKind::CheckViolation,
            info,
        ) => UserPersistenceError::rejected(info.message()),
        DieselError::DatabaseError(DatabaseErrorKind::Unknown, info)
            if is_length_violation(info.message()) =>
        {
            UserPersistenceError::rejected(info.message())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            warn!("database connection closed during user operation");
            UserPersistenceError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        _ => UserPersistenceError::query("database error"),
    }
}
