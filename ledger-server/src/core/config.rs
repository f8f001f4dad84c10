use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | BIND_ADDR | 0.0.0.0 | HTTP listen address |
/// | SNAPSHOT_PATH | (unset) | JSON snapshot seeding the store |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | (unset) | directory for daily rolling log files |
/// | ENVIRONMENT | development | development, staging or production |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout (milliseconds) |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 SNAPSHOT_PATH=./data/ledger.json cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Address the listener binds to
    pub bind_addr: IpAddr,
    /// Snapshot loaded into the store at start-up
    pub snapshot_path: Option<PathBuf>,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
    /// Request timeout (milliseconds)
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            bind_addr: std::env::var("BIND_ADDR")
                .ok()
                .and_then(|a| a.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            snapshot_path: non_empty_var("SNAPSHOT_PATH").map(PathBuf::from),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: non_empty_var("LOG_DIR"),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// Override the parts tests care about
    pub fn with_overrides(http_port: u16, snapshot_path: Option<PathBuf>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.snapshot_path = snapshot_path;
        config
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.http_port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
