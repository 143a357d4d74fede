//! Prometheus adapter for HTTP request metrics.
//!
//! Owns a dedicated registry holding the request counter and the in-flight
//! gauge, and renders it in the text exposition format for `/metrics`.

use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

/// Counter of completed requests.
pub const REQUESTS_TOTAL: &str = "http_requests_total";
/// Gauge of requests currently being handled.
pub const REQUESTS_IN_PROGRESS: &str = "http_requests_in_progress";

/// Prometheus-backed HTTP request metrics.
///
/// # Metric Specification
///
/// - `http_requests_total` (counter), labels `method`, `endpoint`,
///   `status_code`.
/// - `http_requests_in_progress` (gauge), no labels.
///
/// Cloning is cheap; clones share the same registry and collectors.
#[derive(Clone)]
pub struct PrometheusHttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    in_progress: IntGauge,
}

impl PrometheusHttpMetrics {
    /// Create the collectors in a fresh registry.
    ///
    /// # Errors
    ///
    /// Returns an error if a collector cannot be built or registered.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::with_registry(Registry::new())
    }

    /// Create and register the collectors with `registry`.
    ///
    /// # Errors
    ///
    /// Returns an error if a metric with the same name already exists in the
    /// registry.
    pub fn with_registry(registry: Registry) -> Result<Self, prometheus::Error> {
        let requests_total = IntCounterVec::new(
            Opts::new(REQUESTS_TOTAL, "Total HTTP requests by method, endpoint and status"),
            &["method", "endpoint", "status_code"],
        )?;
        let in_progress = IntGauge::new(
            REQUESTS_IN_PROGRESS,
            "HTTP requests currently being handled",
        )?;
        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(in_progress.clone()))?;
        Ok(Self {
            registry,
            requests_total,
            in_progress,
        })
    }

    /// Mark a request as in flight until the returned guard is dropped.
    #[must_use = "the request stops counting as in flight when the guard drops"]
    pub fn start_request(&self) -> InFlightGuard {
        self.in_progress.inc();
        InFlightGuard {
            gauge: self.in_progress.clone(),
        }
    }

    /// Count one completed request.
    pub fn record(&self, method: &str, endpoint: &str, status_code: u16) {
        let status = status_code.to_string();
        self.requests_total
            .with_label_values(&[method, endpoint, status.as_str()])
            .inc();
    }

    /// Current value of the in-flight gauge.
    pub fn in_progress(&self) -> i64 {
        self.in_progress.get()
    }

    /// Completed requests recorded for the given label triple.
    pub fn request_count(&self, method: &str, endpoint: &str, status_code: u16) -> u64 {
        let status = status_code.to_string();
        self.requests_total
            .get_metric_with_label_values(&[method, endpoint, status.as_str()])
            .map_or(0, |counter| counter.get())
    }

    /// Render every registered metric in the text exposition format.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }

    /// Content type of [`PrometheusHttpMetrics::render`] output.
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_owned()
    }
}

/// Decrements the in-flight gauge exactly once, on drop.
///
/// Dropping covers normal completion, error returns, panics unwinding
/// through the handler, and cancelled futures.
pub struct InFlightGuard {
    gauge: IntGauge,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.gauge.dec();
    }
}
