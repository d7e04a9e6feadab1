//! In-memory query engine over the fetched product list.
//!
//! Every step narrows or reorders the collection it is given; nothing
//! is fabricated and the step order is fixed. All steps are
//! deterministic for identical inputs.

use std::cmp::Ordering;
use std::str::FromStr;

use konovo_api::types::Product;

use crate::filters::{normalize_id_values, ProductFilters};

/// Recognized sort keys. Anything else leaves the order unchanged,
/// which is documented behavior rather than an error.
#[derive(Clone, Copy)]
pub enum ProductSortBy {
    Price,
}

impl FromStr for ProductSortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(ProductSortBy::Price),
            _ => Err(()),
        }
    }
}

/// Applies all filter steps in order: category, brand, name, price
/// bounds, then sort. Id-set filters take precedence over their
/// substring counterparts.
pub fn filter_products(mut products: Vec<Product>, filters: &ProductFilters) -> Vec<Product> {
    if !filters.category_ids.is_empty() {
        let ids = normalize_id_values(&filters.category_ids);
        products.retain(|p| id_in_set(p.sif_productcategory.as_deref(), &ids));
    } else if let Some(category) = &filters.category {
        let needle = category.to_lowercase();
        products.retain(|p| contains_ci(p.category_name.as_deref(), &needle));
    }

    if !filters.brand_ids.is_empty() {
        let ids = normalize_id_values(&filters.brand_ids);
        products.retain(|p| id_in_set(p.sif_productbrand.as_deref(), &ids));
    } else if let Some(brand) = &filters.brand {
        let needle = brand.to_lowercase();
        products.retain(|p| contains_ci(p.brand_name.as_deref(), &needle));
    }

    if let Some(name) = &filters.name {
        let needle = name.to_lowercase();
        products.retain(|p| p.naziv.to_lowercase().contains(&needle));
    }

    if filters.has_price_bounds() {
        filter_by_price(&mut products, filters);
    }

    if let Some(sort) = &filters.sort {
        sort_products(&mut products, sort);
    }

    products
}

fn id_in_set(id: Option<&str>, ids: &[String]) -> bool {
    match id {
        Some(id) if !id.is_empty() => ids.iter().any(|i| i == id),
        _ => false,
    }
}

fn contains_ci(value: Option<&str>, lowercase_needle: &str) -> bool {
    value.unwrap_or("").to_lowercase().contains(lowercase_needle)
}

/// Applies the price bounds.
///
/// The inclusive bound wins when both forms of a side are supplied:
/// `price_gte` set means `>=` regardless of `price_gt`, and only a lone
/// `price_gt` gives `>`. Mirrored for `price_lte` / `price_lt`. A bound
/// of exactly zero is treated as unset.
fn filter_by_price(products: &mut Vec<Product>, filters: &ProductFilters) {
    let gte = filters.price_gte.filter(|&v| v != 0.0);
    let gt = filters.price_gt.filter(|&v| v != 0.0);
    if let Some(min_price) = gte.or(gt) {
        if gte.is_some() {
            products.retain(|p| p.price >= min_price);
        } else {
            products.retain(|p| p.price > min_price);
        }
    }

    let lte = filters.price_lte.filter(|&v| v != 0.0);
    let lt = filters.price_lt.filter(|&v| v != 0.0);
    if let Some(max_price) = lte.or(lt) {
        if lte.is_some() {
            products.retain(|p| p.price <= max_price);
        } else {
            products.retain(|p| p.price < max_price);
        }
    }
}

/// Sorts in place by the named field. A leading `-` means descending.
/// The sort is stable; unrecognized keys are a no-op.
pub fn sort_products(products: &mut [Product], sort: &str) {
    let descending = sort.starts_with('-');
    let key = sort.trim_start_matches('-');
    match key.parse::<ProductSortBy>() {
        Ok(ProductSortBy::Price) => {
            if descending {
                products.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal));
            } else {
                products.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal));
            }
        }
        Err(()) => {}
    }
}
