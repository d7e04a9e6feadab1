//! HTTP client for the Konovo catalog service.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    types::{LoginRequest, Product, TokenResponse},
    Error,
};

/// Default base URL of the production catalog service.
pub const DEFAULT_BASE_URL: &str = "https://zadatak.konovo.rs";

/// HTTP client for the Konovo catalog service.
///
/// Holds a single `reqwest::Client` with a 30-second timeout and JSON
/// default headers, shared across all requests for its lifetime. The
/// caller constructs one client per process and passes it into the
/// services that need it.
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the upstream. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production catalog service.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    /// Exchanges credentials for a bearer token via `POST {base}/login`.
    ///
    /// The token is passed through opaque and unmodified; no caching.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<TokenResponse, Error> {
        let url = self.get_url("/login")?;
        let resp = self
            .http
            .post(url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Login request failed: {}", e);
                Error::RequestFailed
            })?;
        read_json(resp).await
    }

    /// Fetches the full product list via `GET {base}/products`.
    ///
    /// A failure yields no products, never a partial list.
    pub async fn products(&self, token: &str) -> Result<Vec<Product>, Error> {
        let url = self.get_url("/products")?;
        let resp = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Product fetch failed: {}", e);
                Error::RequestFailed
            })?;
        read_json(resp).await
    }
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| {
        tracing::error!("Failed to read response body: {}", e);
        Error::RequestFailed
    })?;

    if !status.is_success() {
        let snippet = truncate_body(&body);
        tracing::error!("Request failed with status {}: {}", status, snippet);
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            body: snippet,
        });
    }

    serde_json::from_str::<T>(&body).map_err(|e| {
        let snippet = truncate_body(&body);
        tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
        Error::RequestFailed
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
