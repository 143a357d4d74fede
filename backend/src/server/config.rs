//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use user_store::outbound::metrics::PrometheusHttpMetrics;
use user_store::outbound::persistence::DbPool;

const DEFAULT_CLIENT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) client_request_timeout: Duration,
    pub(crate) db_pool: DbPool,
    pub(crate) metrics: PrometheusHttpMetrics,
}

impl ServerConfig {
    /// Construct a server configuration around an opened pool and a metrics
    /// registry.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool, metrics: PrometheusHttpMetrics) -> Self {
        Self {
            bind_addr,
            client_request_timeout: DEFAULT_CLIENT_REQUEST_TIMEOUT,
            db_pool,
            metrics,
        }
    }

    /// Bound the time a client may take to send a complete request.
    #[must_use]
    pub fn with_client_request_timeout(mut self, timeout: Duration) -> Self {
        self.client_request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn request_timeout_defaults_and_overrides() {
        let metrics = PrometheusHttpMetrics::new().expect("registry");
        let addr: SocketAddr = "127.0.0.1:0".parse().expect("literal address");

        let config = ServerConfig::new(addr, DbPool::uninitialized(), metrics);
        assert_eq!(config.client_request_timeout, Duration::from_secs(30));

        let config = config.with_client_request_timeout(Duration::from_secs(3));
        assert_eq!(config.client_request_timeout, Duration::from_secs(3));
        assert_eq!(config.bind_addr, addr);
    }
}
