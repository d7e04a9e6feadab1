//! Services binding the upstream client to the query engine.
//!
//! Each request fetches the full product set fresh; nothing is cached
//! across requests and upstream failures are never swallowed.

use std::sync::Arc;

use regex::Regex;

use konovo_api::types::{LoginRequest, Product, TokenResponse};
use konovo_api::Client;

use crate::error::KonovoError;
use crate::filters::ProductFilters;
use crate::pagination::{paginate, PaginatedProducts, PaginationFilters};
use crate::query::filter_products;

/// Category whose products get the price markup.
const MONITOR_CATEGORY: &str = "Monitori";
const MONITOR_MARKUP: f64 = 1.10;

/// Authenticates users against the upstream login endpoint.
pub struct AuthService {
    client: Arc<Client>,
}

impl AuthService {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Logs in upstream and passes the bearer token through unmodified.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<TokenResponse, KonovoError> {
        self.client.login(credentials).await.map_err(|e| {
            if e.is_unauthorized() {
                KonovoError::authentication("invalid_credentials", "Invalid credentials")
            } else {
                tracing::error!("login failed upstream: {}", e);
                KonovoError::unavailable()
            }
        })
    }
}

/// Product listing built from the upstream catalog and the in-memory
/// query engine.
pub struct ProductService {
    client: Arc<Client>,
    /// Compiled once; rewrites "brzina" case-insensitively.
    description_rewrite: Regex,
}

impl ProductService {
    pub fn new(client: Arc<Client>) -> Result<Self, KonovoError> {
        let description_rewrite = Regex::new("(?i)brzina")
            .map_err(|e| KonovoError::internal(format!("invalid rewrite pattern: {}", e)))?;
        Ok(Self {
            client,
            description_rewrite,
        })
    }

    async fn fetch_products(&self, token: &str) -> Result<Vec<Product>, KonovoError> {
        self.client.products(token).await.map_err(|e| {
            if e.is_unauthorized() {
                KonovoError::authentication("auth_token_invalid", "Token is missing or is invalid")
            } else {
                tracing::error!("product fetch failed upstream: {}", e);
                KonovoError::unavailable()
            }
        })
    }

    /// Per-item adjustment pipeline: monitor price markup, then the
    /// description rewrite. Order matters.
    fn process_product(&self, mut product: Product) -> Product {
        if product.category_name.as_deref() == Some(MONITOR_CATEGORY) {
            product.price = (product.price * MONITOR_MARKUP * 100.0).round() / 100.0;
        }
        if let Some(description) = &product.description {
            product.description = Some(
                self.description_rewrite
                    .replace_all(description, "performanse")
                    .into_owned(),
            );
        }
        product
    }

    /// Fetch, filter, adjust, paginate. Later steps operate on the
    /// output of earlier ones; pagination always comes last so `total`
    /// reflects the filtered count.
    pub async fn list_products(
        &self,
        token: &str,
        filters: &ProductFilters,
        pagination: &PaginationFilters,
    ) -> Result<PaginatedProducts, KonovoError> {
        let products = self.fetch_products(token).await?;
        let filtered = filter_products(products, filters);
        let processed: Vec<Product> = filtered
            .into_iter()
            .map(|p| self.process_product(p))
            .collect();
        Ok(paginate(processed, pagination))
    }

    /// Returns the first product whose `sif_product` equals the string
    /// form of `product_id`, adjusted. No filtering or pagination.
    pub async fn get_product_by_id(
        &self,
        token: &str,
        product_id: i64,
    ) -> Result<Product, KonovoError> {
        let products = self.fetch_products(token).await?;
        let wanted = product_id.to_string();
        products
            .into_iter()
            .find(|p| p.sif_product == wanted)
            .map(|p| self.process_product(p))
            .ok_or_else(|| {
                KonovoError::not_found(
                    "product_not_found",
                    format!("Product with id {} does not exist", product_id),
                )
            })
    }
}
