//! Outbound adapters for metrics exporting.

mod prometheus_http;

pub use prometheus_http::{
    InFlightGuard, PrometheusHttpMetrics, REQUESTS_IN_PROGRESS, REQUESTS_TOTAL,
};
