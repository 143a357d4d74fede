//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

use super::pool::DbPool;
use super::user_persistence_error_mapping::map_pool_error;
use super::user_queries::{fetch_all_users, fetch_user_by_id, insert_user};

/// Diesel-backed implementation of the `UserRepository` port.
///
/// Each call borrows one pooled connection for its duration; the guard
/// returns it to the pool whether the query succeeds or fails.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.acquire().await.map_err(map_pool_error)?;
        insert_user(&mut conn, user).await
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.acquire().await.map_err(map_pool_error)?;
        fetch_user_by_id(&mut conn, id).await
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.acquire().await.map_err(map_pool_error)?;
        fetch_all_users(&mut conn).await
    }
}
