//! Embedded PostgreSQL bootstrap shared by the integration suites.
//!
//! Unless `PG_RUNTIME_DIR` and `PG_DATA_DIR` are both set, each cluster gets
//! its own install and data directories under `target/pg-embed`. The
//! variables are overridden through `env-lock` while the cluster starts.

use std::path::PathBuf;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use pg_embedded_setup_unpriv::TestCluster;
use uuid::Uuid;

static BOOTSTRAP: Mutex<()> = Mutex::new(());

const ATTEMPTS: u32 = 4;
const FIRST_BACKOFF: Duration = Duration::from_millis(500);

/// Failure fragments worth another download attempt.
const TRANSIENT: [&str; 4] = ["connection reset", "timed out", "dns error", "decoding response body"];

struct ClusterDirs {
    install: PathBuf,
    data: PathBuf,
}

impl ClusterDirs {
    fn create() -> std::io::Result<Self> {
        let target = std::env::var_os("CARGO_TARGET_DIR").map_or_else(
            || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../target"),
            PathBuf::from,
        );
        let base = target
            .join("pg-embed")
            .join(format!("user-store-{}", Uuid::new_v4().simple()));
        let dirs = Self {
            install: base.join("install"),
            data: base.join("data"),
        };
        std::fs::create_dir_all(&dirs.install)?;
        std::fs::create_dir_all(&dirs.data)?;
        Ok(dirs)
    }

    fn env(&self) -> [(&'static str, Option<String>); 2] {
        [
            ("PG_RUNTIME_DIR", Some(self.install.display().to_string())),
            ("PG_DATA_DIR", Some(self.data.display().to_string())),
        ]
    }
}

fn is_transient(message: &str) -> bool {
    let lowered = message.to_lowercase();
    TRANSIENT.iter().any(|fragment| lowered.contains(fragment))
}

/// Start a [`TestCluster`], backing off and retrying on flaky downloads.
pub fn test_cluster() -> Result<TestCluster, String> {
    let _serial = BOOTSTRAP.lock().unwrap_or_else(|err| err.into_inner());

    let caller_configured =
        std::env::var_os("PG_RUNTIME_DIR").is_some() && std::env::var_os("PG_DATA_DIR").is_some();
    let _env = if caller_configured {
        None
    } else {
        let dirs = ClusterDirs::create().map_err(|err| err.to_string())?;
        Some(env_lock::lock_env(dirs.env()))
    };

    let mut backoff = FIRST_BACKOFF;
    let mut attempt = 1;
    loop {
        match TestCluster::new() {
            Ok(cluster) => return Ok(cluster),
            Err(err) => {
                let message = format!("{err:?}");
                if attempt == ATTEMPTS || !is_transient(&message) {
                    return Err(message);
                }
                eprintln!("pg-embed: attempt {attempt}/{ATTEMPTS} failed, retrying in {backoff:?}");
                thread::sleep(backoff);
                backoff *= 2;
                attempt += 1;
            }
        }
    }
}
