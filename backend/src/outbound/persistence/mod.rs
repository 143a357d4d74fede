//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementation of the domain `UserRepository` port backed by
//! PostgreSQL via `diesel-async` and a `bb8` pool.
//!
//! - **Thin adapters**: the repository only translates between Diesel rows
//!   and domain types. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: database errors are mapped to
//!   `UserPersistenceError`.
//!
//! ```ignore
//! use user_store::outbound::persistence::{DbPool, PoolConfig, DieselUserRepository};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/testdb")).await?;
//! ensure_schema(&pool).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod models;
mod pool;
mod schema;
mod schema_init;
mod user_persistence_error_mapping;
mod user_queries;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError, ScopedConnection};
pub use schema_init::{CREATE_USERS_TABLE, SchemaError, ensure_schema};
pub use user_queries::{fetch_all_users, fetch_user_by_id, insert_user};
