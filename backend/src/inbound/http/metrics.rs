//! Prometheus scrape endpoint.

use actix_web::{HttpResponse, get, http::header, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::outbound::metrics::PrometheusHttpMetrics;

/// Render request metrics in the text exposition format.
#[utoipa::path(
    get,
    path = "/metrics",
    tags = ["metrics"],
    responses(
        (status = 200, description = "Prometheus text exposition", content_type = "text/plain", body = String),
        (status = 500, description = "Encoding failed", body = Error)
    ),
    operation_id = "metrics"
)]
#[get("/metrics")]
pub async fn metrics(metrics: web::Data<PrometheusHttpMetrics>) -> ApiResult<HttpResponse> {
    let body = metrics
        .render()
        .map_err(|err| Error::internal(format!("failed to encode metrics: {err}")))?;
    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, metrics.content_type()))
        .body(body))
}
