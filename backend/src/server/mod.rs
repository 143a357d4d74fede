//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

#[cfg(debug_assertions)]
use user_store::ApiDoc;
use user_store::domain::UserService;
use user_store::inbound::http::extractors::{json_config, path_config};
use user_store::inbound::http::health::{HealthState, api_health, live, ready};
use user_store::inbound::http::metrics::metrics;
use user_store::inbound::http::state::HttpState;
use user_store::inbound::http::users;
use user_store::outbound::metrics::PrometheusHttpMetrics;
use user_store::outbound::persistence::{DbPool, DieselUserRepository};
use user_store::{RequestMetrics, Trace};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    metrics: PrometheusHttpMetrics,
}

fn build_http_state(pool: &DbPool) -> HttpState {
    let repository = Arc::new(DieselUserRepository::new(pool.clone()));
    HttpState::from_service(Arc::new(UserService::new(repository)))
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        metrics: registry,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::Data::new(registry.clone()))
        .app_data(json_config())
        .app_data(path_config())
        .wrap(RequestMetrics::new(registry))
        .wrap(Trace)
        .service(users::scope())
        .service(api_health)
        .service(metrics)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Readiness is marked once the listener is bound; callers open the pool and
/// ensure the schema before calling this.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        client_request_timeout,
        db_pool,
        metrics: registry,
    } = config;
    let http_state = web::Data::new(build_http_state(&db_pool));
    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state,
        metrics: registry,
    };

    let server = HttpServer::new(move || build_app(deps.clone()))
        .client_request_timeout(client_request_timeout)
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "http server bound");
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::{fixture, rstest};
    use user_store::domain::TRACE_ID_HEADER;

    #[fixture]
    fn deps() -> AppDependencies {
        AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: web::Data::new(build_http_state(&DbPool::uninitialized())),
            metrics: PrometheusHttpMetrics::new().expect("registry"),
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn health_is_served_without_a_database(deps: AppDependencies) {
        let app = test::init_service(build_app(deps)).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key(TRACE_ID_HEADER));
    }

    #[rstest]
    #[actix_web::test]
    async fn users_answer_503_when_pool_is_not_open(deps: AppDependencies) {
        let registry = deps.metrics.clone();
        let app = test::init_service(build_app(deps)).await;
        let req = test::TestRequest::get().uri("/users/users").to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(registry.request_count("GET", "/users/users", 503), 1);
        assert_eq!(registry.in_progress(), 0);
    }

    #[rstest]
    #[actix_web::test]
    async fn readiness_starts_unready(deps: AppDependencies) {
        let app = test::init_service(build_app(deps)).await;
        let req = test::TestRequest::get().uri("/health/ready").to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
