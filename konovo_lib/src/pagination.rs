//! Pagination of the filtered product list.

use serde::{Deserialize, Serialize};

use konovo_api::types::Product;

use crate::error::KonovoError;

/// Requested page window. Both fields optional; `page` is 1-based.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationFilters {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl PaginationFilters {
    /// Builds pagination from raw query pairs. A value that does not
    /// parse as an integer is a validation error.
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Result<Self, KonovoError> {
        let mut pagination = PaginationFilters::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => pagination.page = Some(parse_int(key, value)?),
                "page_size" => pagination.page_size = Some(parse_int(key, value)?),
                _ => {}
            }
        }
        Ok(pagination)
    }
}

fn parse_int(param: &str, raw: &str) -> Result<i64, KonovoError> {
    raw.trim().parse::<i64>().map_err(|_| {
        KonovoError::validation(format!("{} must be an integer, got {:?}", param, raw))
    })
}

/// Pagination metadata returned alongside the page and mirrored into
/// response headers. `total` is the filtered, pre-pagination count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

/// One page of products plus its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedProducts {
    pub products: Vec<Product>,
    pub meta: Pagination,
}

/// Slices `products` to the requested window.
///
/// `page` and `page_size` values of zero are treated as absent, like a
/// missing parameter. A missing `page_size` becomes the full total, so
/// everything fits on page one. An out-of-range page yields an empty
/// page, not an error.
pub fn paginate(products: Vec<Product>, pagination: &PaginationFilters) -> PaginatedProducts {
    let total = products.len() as i64;
    let page = pagination.page.filter(|&p| p != 0).unwrap_or(1).max(1);
    let page_size = pagination
        .page_size
        .filter(|&s| s != 0)
        .unwrap_or(total)
        .max(1);

    let start = (page as usize - 1).saturating_mul(page_size as usize);
    let paged: Vec<Product> = products
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();

    PaginatedProducts {
        products: paged,
        meta: Pagination {
            total,
            page,
            page_size,
        },
    }
}
