//! Per-test databases on an embedded cluster.

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use uuid::Uuid;

use super::format_postgres_error;
use super::pg_embed::test_cluster;

/// A freshly created, empty database. Dropping it stops the cluster.
pub struct TestDatabase {
    url: String,
    _cluster: TestCluster,
}

impl TestDatabase {
    /// Start a cluster and create a uniquely named database on it.
    pub fn create() -> Result<Self, String> {
        let cluster = test_cluster()?;
        let name = format!("user_store_{}", Uuid::new_v4().simple());

        let admin_url = cluster.connection().database_url("postgres");
        let mut admin = Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
        admin
            .batch_execute(&format!("CREATE DATABASE \"{name}\""))
            .map_err(|err| format_postgres_error(&err))?;

        Ok(Self {
            url: cluster.connection().database_url(&name),
            _cluster: cluster,
        })
    }

    /// Connection URL for the test database.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Open a synchronous client for seeding and assertions.
    pub fn client(&self) -> Client {
        Client::connect(&self.url, NoTls)
            .unwrap_or_else(|err| panic!("connect to test database: {}", format_postgres_error(&err)))
    }

    /// Number of rows in `users` with the given email.
    pub fn count_users_with_email(&self, email: &str) -> i64 {
        self.client()
            .query_one("SELECT COUNT(*) FROM users WHERE email = $1", &[&email])
            .unwrap_or_else(|err| panic!("count users: {}", format_postgres_error(&err)))
            .get(0)
    }
}
