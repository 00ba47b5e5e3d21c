use std::time::Duration;

/// Where the dashboard's services live, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// CMS REST root, e.g. `http://localhost:1337/api`.
    pub cms_base_url: String,
    /// Origin serving the session relay endpoints.
    pub relay_base_url: String,
    /// Timeout applied to every outgoing HTTP request, in seconds.
    pub http_timeout_secs: u64,
}

impl DashboardConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var             | Default                     |
    /// |---------------------|-----------------------------|
    /// | `CMS_BASE_URL`      | `NEXT_PUBLIC_BASE_URL`, then `http://localhost:1337/api` |
    /// | `RELAY_BASE_URL`    | `http://localhost:3000`     |
    /// | `HTTP_TIMEOUT_SECS` | `30`                        |
    pub fn from_env() -> Self {
        let cms_base_url = std::env::var("CMS_BASE_URL")
            .or_else(|_| std::env::var("NEXT_PUBLIC_BASE_URL"))
            .unwrap_or_else(|_| "http://localhost:1337/api".into());

        let relay_base_url =
            std::env::var("RELAY_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        let http_timeout_secs: u64 = std::env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("HTTP_TIMEOUT_SECS must be a valid u64");

        Self {
            cms_base_url,
            relay_base_url,
            http_timeout_secs,
        }
    }

    /// Load `.env` (if present) and then the environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
