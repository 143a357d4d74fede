//! Driven port for user persistence and its error type.
//!
//! Adapters own connection acquisition: every call borrows a pooled
//! connection for its duration and returns it on all exit paths.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// No connection could be obtained or the connection dropped.
        Connection { message: String } => "user repository connection failed: {message}",
        /// The email address is already registered.
        DuplicateEmail { email: String } => "a user with email {email} already exists",
        /// A column constraint rejected the values.
        Rejected { message: String } => "user record rejected by storage: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage for [`User`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the stored record with its assigned id.
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier; `Ok(None)` when no row matches.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch every stored user. No ordering is guaranteed.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;
}
