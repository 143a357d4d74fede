//! Driving port for user creation.

use async_trait::async_trait;

use crate::domain::{NewUser, User};

use super::UserPersistenceError;

/// Use-case port invoked by inbound adapters to register users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store `user` and return the record as persisted.
    ///
    /// Persistence failures are returned unchanged so the inbound adapter can
    /// pick the transport-level response.
    async fn create_user(&self, user: NewUser) -> Result<User, UserPersistenceError>;
}
