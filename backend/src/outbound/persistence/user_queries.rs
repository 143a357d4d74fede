//! Parameterized user queries executed on a borrowed connection.
//!
//! Every value is sent as a bind parameter through the Diesel query builder;
//! no SQL text is assembled from input.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::UserPersistenceError;
use crate::domain::{NewUser, User, UserId};

use super::models::{NewUserRow, UserRow};
use super::schema::users;
use super::user_persistence_error_mapping::map_diesel_error;

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    User::try_from(row).map_err(|err| {
        UserPersistenceError::query(format!("stored user failed validation: {err}"))
    })
}

/// Insert `user` and return the stored row with its assigned id.
///
/// # Errors
///
/// [`UserPersistenceError::DuplicateEmail`] when the email is taken and
/// [`UserPersistenceError::Rejected`] when a column constraint fails.
pub async fn insert_user(
    conn: &mut AsyncPgConnection,
    user: &NewUser,
) -> Result<User, UserPersistenceError> {
    let email = user.email().as_ref();
    let row = NewUserRow {
        name: user.name().as_ref(),
        email,
    };

    let stored = diesel::insert_into(users::table)
        .values(&row)
        .returning(UserRow::as_returning())
        .get_result(conn)
        .await
        .map_err(|err| map_diesel_error(err, Some(email)))?;
    row_to_user(stored)
}

/// Point lookup by primary key. No match is `Ok(None)`.
pub async fn fetch_user_by_id(
    conn: &mut AsyncPgConnection,
    id: UserId,
) -> Result<Option<User>, UserPersistenceError> {
    let found = users::table
        .filter(users::id.eq(id.get()))
        .select(UserRow::as_select())
        .first(conn)
        .await
        .optional()
        .map_err(|err| map_diesel_error(err, None))?;
    found.map(row_to_user).transpose()
}

/// Every stored user, eagerly materialised. Row order is whatever the
/// database returns.
pub async fn fetch_all_users(
    conn: &mut AsyncPgConnection,
) -> Result<Vec<User>, UserPersistenceError> {
    let rows = users::table
        .select(UserRow::as_select())
        .load(conn)
        .await
        .map_err(|err| map_diesel_error(err, None))?;
    rows.into_iter().map(row_to_user).collect()
}
