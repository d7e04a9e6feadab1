//! Server configuration, read from the environment at startup.

use konovo_api::DEFAULT_BASE_URL;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Base URL of the upstream catalog service.
    pub upstream_base_url: String,
    /// Origins allowed by CORS, comma-separated in the environment.
    pub cors_allow_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let upstream_base_url =
            std::env::var("KONOVO_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let cors_allow_origins = std::env::var("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self {
            bind_addr,
            upstream_base_url,
            cors_allow_origins,
        }
    }
}
