//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod extractors;
pub mod health;
pub mod metrics;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;
