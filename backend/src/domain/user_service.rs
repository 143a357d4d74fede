//! User service implementing the driving ports over a [`UserRepository`].
//!
//! The service adds no business rules: input arrives already validated and
//! persistence failures pass through untouched.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{NewUser, User, UserId};

/// Orchestrates user use-cases against a repository.
pub struct UserService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> UserService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create_user(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let created = self.repository.create(&user).await?;
        info!(user_id = %created.id(), "user created");
        Ok(created)
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn get_user(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        self.repository.find_by_id(id).await
    }

    async fn list_users(&self) -> Result<Vec<User>, UserPersistenceError> {
        self.repository.list().await
    }
}
