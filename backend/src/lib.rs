//! User store service library.
//!
//! Hexagonal layout: [`domain`] holds entities, errors and ports;
//! [`outbound`] implements the driven ports (PostgreSQL via Diesel,
//! Prometheus); [`inbound`] exposes the HTTP surface; [`middleware`] wraps
//! every request with tracing and metrics.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::{RequestMetrics, Trace};
