//! Domain primitives, services, and ports.
//!
//! Purpose: define strongly typed entities used by the HTTP and persistence
//! layers, keeping both framework and storage details out.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - User / NewUser / UserId / UserName / EmailAddress: the user entity.
//! - UserService: orchestration over the [`ports::UserRepository`] port.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    EMAIL_MAX, EmailAddress, NewUser, USER_NAME_MAX, User, UserId, UserName, UserValidationError,
};
pub use self::user_service::UserService;
