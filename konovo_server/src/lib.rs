//! HTTP boundary for the Konovo product BFF.
//!
//! Thin plumbing only: route wiring, bearer extraction, CORS, and the
//! error-kind to status mapping. All product logic lives in `konovo_lib`.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
