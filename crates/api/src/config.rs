use std::path::PathBuf;

use pazarin_core::session::DEFAULT_SESSION_TTL_SECS;

/// Server configuration loaded from environment variables.
///
/// All fields except the cookie settings have defaults suitable for local
/// development.
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
    /// Built front-end served for every non-API path, if set.
    pub static_dir: Option<PathBuf>,
    /// Session cookie settings.
    pub session: SessionConfig,
}

/// Session cookie settings.
#[derive(Clone)]
pub struct SessionConfig {
    /// Cookie name; its presence is what the route gate checks.
    pub cookie_name: String,
    /// Password the sealing key is derived from (at least 32 characters).
    pub cookie_password: String,
    /// Add the `Secure` attribute (enable behind HTTPS).
    pub secure: bool,
    /// Cookie and sealed-session lifetime in seconds.
    pub ttl_secs: i64,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("cookie_name", &self.cookie_name)
            .field("cookie_password", &"<redacted>")
            .field("secure", &self.secure)
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STATIC_DIR`           | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
            session: SessionConfig::from_env(),
        }
    }
}

impl SessionConfig {
    /// Load session cookie settings.
    ///
    /// | Env Var           | Required | Default   |
    /// |-------------------|----------|-----------|
    /// | `COOKIE_NAME`     | **yes**  | --        |
    /// | `COOKIE_PASSWORD` | **yes**  | --        |
    /// | `COOKIE_SECURE`   | no       | `false`   |
    /// | `COOKIE_TTL_SECS` | no       | `1209600` |
    ///
    /// # Panics
    ///
    /// Panics if `COOKIE_NAME` or `COOKIE_PASSWORD` is missing or empty.
    pub fn from_env() -> Self {
        let cookie_name =
            std::env::var("COOKIE_NAME").expect("COOKIE_NAME must be set in the environment");
        assert!(!cookie_name.trim().is_empty(), "COOKIE_NAME must not be empty");

        let cookie_password = std::env::var("COOKIE_PASSWORD")
            .expect("COOKIE_PASSWORD must be set in the environment");
        assert!(!cookie_password.is_empty(), "COOKIE_PASSWORD must not be empty");

        let secure = std::env::var("COOKIE_SECURE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let ttl_secs: i64 = std::env::var("COOKIE_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_SECS.to_string())
            .parse()
            .expect("COOKIE_TTL_SECS must be a valid i64");

        Self {
            cookie_name: cookie_name.trim().to_string(),
            cookie_password,
            secure,
            ttl_secs,
        }
    }
}
