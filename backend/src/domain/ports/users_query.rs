//! Driving port for user-facing reads.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch users without
//! importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::UserPersistenceError;

/// Use-case port for reading users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Look up a single user. Absence is `Ok(None)`, not an error.
    async fn get_user(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Return every user; callers must not assume any order.
    async fn list_users(&self) -> Result<Vec<User>, UserPersistenceError>;
}
