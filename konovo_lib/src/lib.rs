//! Domain layer for the Konovo product BFF: error kinds, the in-memory
//! product query engine, and the services that bind it to the upstream
//! catalog client.
//!
//! Wraps the `konovo_api` crate with domain error mapping, filtering,
//! sorting, pagination, and the per-item adjustment pipeline.

pub mod error;
pub mod filters;
pub mod pagination;
pub mod query;
pub mod service;

pub use konovo_api;
pub use konovo_api::types;

pub use error::{ErrorKind, KonovoError};
pub use filters::ProductFilters;
pub use pagination::{PaginatedProducts, Pagination, PaginationFilters};
pub use service::{AuthService, ProductService};
