//! HTTP routes: thin plumbing between axum and the domain services.

use axum::extract::{Path, Query, State};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use konovo_api::types::{LoginRequest, Product, TokenResponse};
use konovo_lib::{PaginationFilters, ProductFilters};

use crate::error::ApiError;
use crate::extract::BearerToken;
use crate::state::AppState;

pub fn router(state: AppState, cors_allow_origins: &[String]) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/products", get(list_products))
        .route("/products/:product_id", get(get_product_by_id))
        .layer(cors_layer(cors_allow_origins))
        .with_state(state)
}

fn cors_layer(allow_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allow_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.auth.login(&credentials).await?;
    Ok(Json(token))
}

async fn list_products(
    State(state): State<AppState>,
    token: BearerToken,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let filters = ProductFilters::from_query_pairs(&params)?;
    let pagination = PaginationFilters::from_query_pairs(&params)?;
    let page = state
        .products
        .list_products(&token.0, &filters, &pagination)
        .await?;

    let meta = page.meta;
    let mut response = Json(page).into_response();
    let headers = response.headers_mut();
    headers.insert("x-total-count", HeaderValue::from(meta.total));
    headers.insert("x-page", HeaderValue::from(meta.page));
    headers.insert("x-page-size", HeaderValue::from(meta.page_size));
    Ok(response)
}

async fn get_product_by_id(
    State(state): State<AppState>,
    token: BearerToken,
    Path(product_id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .products
        .get_product_by_id(&token.0, product_id)
        .await?;
    Ok(Json(product))
}
