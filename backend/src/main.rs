//! User store entry-point: loads configuration, opens the database pool,
//! ensures the schema and serves the HTTP API until shutdown.

mod server;

use std::path::PathBuf;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_store::inbound::http::health::HealthState;
use user_store::outbound::metrics::PrometheusHttpMetrics;
use user_store::outbound::persistence::{DbPool, ensure_schema};
use user_store::settings::{DatabaseSettings, ServerSettings};

use server::{ServerConfig, create_server};

type DotenvOutcome = Result<PathBuf, dotenvy::Error>;

/// Apply `.env` before reading `RUST_LOG`, so the file can set the filter.
fn load_environment(load: impl FnOnce() -> DotenvOutcome) -> (DotenvOutcome, EnvFilter) {
    let loaded = load();
    (loaded, EnvFilter::from_default_env())
}

fn init_tracing(filter: EnvFilter) {
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

fn report_dotenv(outcome: DotenvOutcome) {
    match outcome {
        Ok(path) => info!(path = %path.display(), "loaded .env file"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(error = %err, "ignoring unreadable .env file"),
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let (dotenv, filter) = load_environment(dotenvy::dotenv);
    init_tracing(filter);
    report_dotenv(dotenv);

    let database = DatabaseSettings::load()?;
    let settings = ServerSettings::load()?;
    let bind_addr = settings.bind_addr()?;
    let pool_config = settings.pool_config(database.database_url()?)?;

    let pool = DbPool::new(pool_config)
        .await
        .wrap_err_with(|| format!("failed to open pool for {}:{}", database.host(), database.port()))?;
    ensure_schema(&pool)
        .await
        .wrap_err("failed to ensure database schema")?;

    let metrics = PrometheusHttpMetrics::new().wrap_err("failed to register metrics")?;
    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, pool.clone(), metrics)
        .with_client_request_timeout(settings.request_timeout());

    let served = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?
        .await;

    health_state.mark_unhealthy();
    pool.close();
    served.wrap_err("http server terminated with an error")
}
