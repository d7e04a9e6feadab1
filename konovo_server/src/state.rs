use std::sync::Arc;

use konovo_api::Client;
use konovo_lib::{AuthService, ProductService};

use crate::config::ServerConfig;

/// Shared per-process resources: one upstream HTTP client, wrapped by
/// the two services. Constructed once at startup and released when the
/// process exits; nothing here is mutable across requests.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub products: Arc<ProductService>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        let client = Arc::new(Client::with_base_url(&config.upstream_base_url)?);
        let auth = Arc::new(AuthService::new(client.clone()));
        let products = Arc::new(ProductService::new(client)?);
        Ok(Self { auth, products })
    }
}
