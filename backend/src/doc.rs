//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer (users,
//! health, metrics) and the request/response schemas they use. The document
//! backs Swagger UI in debug builds and is exported via
//! `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, User};
use crate::inbound::http::health::HealthStatus;
use crate::inbound::http::users::CreateUserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User store API",
        description = "Create, fetch and list users; health probes and Prometheus metrics."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::health::api_health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::metrics::metrics,
    ),
    components(schemas(User, CreateUserRequest, Error, ErrorCode, HealthStatus)),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "metrics", description = "Prometheus scrape endpoint")
    )
)]
pub struct ApiDoc;
