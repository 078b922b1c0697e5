use acmon_core::store::{DedupPolicy, DEFAULT_MAX_ROWS};
use sha2::{Digest, Sha256};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Dashboard login username.
    pub dashboard_user: String,
    /// SHA-256 hex digest of the dashboard password.
    pub dashboard_password_sha256: String,
    /// History buffer capacity.
    pub max_rows: usize,
    /// Same-second history dedup policy.
    pub dedup: DedupPolicy,
    /// Monitor the optional water-pump and exhaust-valve components in
    /// addition to bearings and radiator.
    pub monitor_extended: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `DASHBOARD_USER`       | `admin`                 |
    /// | `DASHBOARD_PASSWORD`   | `Admin123!`             |
    /// | `MAX_ROWS`             | `5000`                  |
    /// | `HISTORY_DEDUP`        | `append_all`            |
    /// | `MONITOR_EXTENDED`     | `false`                 |
    ///
    /// `HISTORY_DEDUP` accepts `append_all` or `coalesce_seconds`.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let dashboard_user = std::env::var("DASHBOARD_USER").unwrap_or_else(|_| "admin".into());

        let dashboard_password =
            std::env::var("DASHBOARD_PASSWORD").unwrap_or_else(|_| "Admin123!".into());
        let dashboard_password_sha256 = sha256_hex(&dashboard_password);

        let max_rows: usize = std::env::var("MAX_ROWS")
            .unwrap_or_else(|_| DEFAULT_MAX_ROWS.to_string())
            .parse()
            .expect("MAX_ROWS must be a valid usize");

        let dedup = match std::env::var("HISTORY_DEDUP")
            .unwrap_or_else(|_| "append_all".into())
            .as_str()
        {
            "append_all" => DedupPolicy::AppendAll,
            "coalesce_seconds" => DedupPolicy::CoalesceSeconds,
            other => panic!("HISTORY_DEDUP must be 'append_all' or 'coalesce_seconds', got '{other}'"),
        };

        let monitor_extended = std::env::var("MONITOR_EXTENDED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            dashboard_user,
            dashboard_password_sha256,
            max_rows,
            dedup,
            monitor_extended,
        }
    }
}

/// Lowercase hex SHA-256 digest of a string.
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}
