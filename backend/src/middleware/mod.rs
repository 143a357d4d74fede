//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns such as
//! tracing and metrics.

pub mod metrics;
pub mod trace;

pub use metrics::{RequestMetrics, UNMATCHED_ENDPOINT};
pub use trace::Trace;
