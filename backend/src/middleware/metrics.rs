//! Request metrics middleware.
//!
//! Wraps every request, including `/metrics` itself, in an in-flight gauge
//! guard and counts the finished request under
//! `(method, endpoint, status_code)`. The endpoint label is the matched
//! route pattern (`/users/users/{id}`). Requests that match no route share
//! the [`UNMATCHED_ENDPOINT`] label, keeping the series count bounded.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use futures_util::future::{LocalBoxFuture, Ready, ready};

use crate::outbound::metrics::PrometheusHttpMetrics;

/// Endpoint label recorded for requests no route matched.
pub const UNMATCHED_ENDPOINT: &str = "<unmatched>";

/// Middleware recording request counts and the in-flight gauge.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_store::RequestMetrics;
/// use user_store::outbound::metrics::PrometheusHttpMetrics;
///
/// let metrics = PrometheusHttpMetrics::new().expect("registry");
/// let app = App::new().wrap(RequestMetrics::new(metrics));
/// ```
#[derive(Clone)]
pub struct RequestMetrics {
    metrics: PrometheusHttpMetrics,
}

impl RequestMetrics {
    /// Record into `metrics`.
    pub fn new(metrics: PrometheusHttpMetrics) -> Self {
        Self { metrics }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestMetrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestMetricsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestMetricsMiddleware {
            service,
            metrics: self.metrics.clone(),
        }))
    }
}

/// Service wrapper produced by [`RequestMetrics`].
pub struct RequestMetricsMiddleware<S> {
    service: S,
    metrics: PrometheusHttpMetrics,
}

impl<S, B> Service<ServiceRequest> for RequestMetricsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let in_flight = self.metrics.start_request();
        let method = req.method().to_string();
        let endpoint = req
            .match_pattern()
            .unwrap_or_else(|| UNMATCHED_ENDPOINT.to_owned());
        let metrics = self.metrics.clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            let _in_flight = in_flight;
            let result = fut.await;
            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            metrics.record(&method, &endpoint, status.as_u16());
            result
        })
    }
}
