//! Users API handlers.
//!
//! ```text
//! POST /users/users {"name":"Ana","email":"ana@example.com"}
//! GET  /users/users
//! GET  /users/users/{id}
//! ```

use actix_web::{HttpResponse, Scope, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, User, UserId, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_user_persistence_error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::map_user_validation_error;

/// Request body for `POST /users/users`.
///
/// Unknown fields, including any client-supplied `id`, are ignored.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = UserValidationError;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        Self::try_from_strings(value.name, value.email)
    }
}

/// Routes mounted under `/users`.
pub fn scope() -> Scope {
    web::scope("/users")
        .service(create_user)
        .service(list_users)
        .service(get_user)
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/users/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 409, description = "Email already registered", body = Error),
        (status = 422, description = "Invalid request", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = NewUser::try_from(payload.into_inner()).map_err(map_user_validation_error)?;
    let user = state
        .users_command
        .create_user(new_user)
        .await
        .map_err(map_user_persistence_error)?;
    Ok(HttpResponse::Created().json(user))
}

/// Fetch one user by id.
#[utoipa::path(
    get,
    path = "/users/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "No user with this id", body = Error),
        (status = 422, description = "Identifier is not an integer", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::new(path.into_inner());
    let found = state
        .users_query
        .get_user(id)
        .await
        .map_err(map_user_persistence_error)?;
    found
        .map(web::Json)
        .ok_or_else(|| Error::not_found(format!("user {id} not found")))
}

/// List every user. Order is unspecified.
#[utoipa::path(
    get,
    path = "/users/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state
        .users_query
        .list_users()
        .await
        .map_err(map_user_persistence_error)?;
    Ok(web::Json(users))
}
