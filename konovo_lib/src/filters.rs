//! Product listing filters and their query-string parsing rules.

use crate::error::KonovoError;

/// Filters for the product listing. Every field is independently
/// optional; an empty id list or `None` means no constraint from that
/// dimension.
#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    /// Case-insensitive substring match on `naziv`.
    pub name: Option<String>,
    /// Raw `brand_ids` query values, one entry per occurrence.
    pub brand_ids: Vec<String>,
    /// Raw `category_ids` query values, one entry per occurrence.
    pub category_ids: Vec<String>,
    /// Case-insensitive substring match on `brandName`. Ignored when
    /// `brand_ids` is non-empty.
    pub brand: Option<String>,
    /// Case-insensitive substring match on `categoryName`. Ignored when
    /// `category_ids` is non-empty.
    pub category: Option<String>,
    pub price_lt: Option<f64>,
    pub price_lte: Option<f64>,
    pub price_gt: Option<f64>,
    pub price_gte: Option<f64>,
    /// Sort field, optionally prefixed with `-` for descending.
    pub sort: Option<String>,
}

impl ProductFilters {
    /// Builds filters from raw query pairs, preserving the multiplicity
    /// of repeated `brand_ids` / `category_ids` keys. Unknown keys are
    /// ignored; a price value that does not parse as a number is a
    /// validation error.
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Result<Self, KonovoError> {
        let mut filters = ProductFilters::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => filters.name = Some(value.clone()),
                "brand_ids" => filters.brand_ids.push(value.clone()),
                "category_ids" => filters.category_ids.push(value.clone()),
                "brand" => filters.brand = Some(value.clone()),
                "category" => filters.category = Some(value.clone()),
                "price_lt" => filters.price_lt = Some(parse_price(key, value)?),
                "price_lte" => filters.price_lte = Some(parse_price(key, value)?),
                "price_gt" => filters.price_gt = Some(parse_price(key, value)?),
                "price_gte" => filters.price_gte = Some(parse_price(key, value)?),
                "sort" => filters.sort = Some(value.clone()),
                _ => {}
            }
        }
        Ok(filters)
    }

    pub fn has_price_bounds(&self) -> bool {
        self.price_lt.is_some()
            || self.price_lte.is_some()
            || self.price_gt.is_some()
            || self.price_gte.is_some()
    }
}

fn parse_price(param: &str, raw: &str) -> Result<f64, KonovoError> {
    raw.trim().parse::<f64>().map_err(|_| {
        KonovoError::validation(format!("{} must be a number, got {:?}", param, raw))
    })
}

/// Resolves raw id query values into the effective id set.
///
/// Exactly one raw value is treated as a comma-separated list: split,
/// trimmed, empty tokens dropped. More than one raw value means each is
/// a literal id with no further splitting. The asymmetry is intentional
/// and callers rely on it.
pub fn normalize_id_values(raw: &[String]) -> Vec<String> {
    if raw.len() == 1 {
        raw[0]
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        raw.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn single_value_is_split_on_commas() {
        let ids = normalize_id_values(&["1, 2 ,3,,4".to_string()]);
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn multiple_values_are_literal() {
        let ids = normalize_id_values(&["1,2".to_string(), "3".to_string()]);
        assert_eq!(ids, vec!["1,2", "3"]);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(normalize_id_values(&[]).is_empty());
    }

    #[test]
    fn from_query_pairs_collects_repeated_ids() {
        let filters = ProductFilters::from_query_pairs(&pairs(&[
            ("brand_ids", "1"),
            ("brand_ids", "2"),
            ("category_ids", "5,6"),
            ("name", "monitor"),
            ("sort", "-price"),
        ]))
        .unwrap();
        assert_eq!(filters.brand_ids, vec!["1", "2"]);
        assert_eq!(filters.category_ids, vec!["5,6"]);
        assert_eq!(filters.name.as_deref(), Some("monitor"));
        assert_eq!(filters.sort.as_deref(), Some("-price"));
    }

    #[test]
    fn from_query_pairs_parses_prices() {
        let filters = ProductFilters::from_query_pairs(&pairs(&[
            ("price_gte", "10.5"),
            ("price_lt", "200"),
        ]))
        .unwrap();
        assert_eq!(filters.price_gte, Some(10.5));
        assert_eq!(filters.price_lt, Some(200.0));
        assert!(filters.has_price_bounds());
    }

    #[test]
    fn from_query_pairs_rejects_non_numeric_price() {
        let err =
            ProductFilters::from_query_pairs(&pairs(&[("price_gt", "cheap")])).unwrap_err();
        assert_eq!(err.kind, crate::ErrorKind::Validation);
        assert!(err.detail.contains("price_gt"));
    }

    #[test]
    fn from_query_pairs_ignores_unknown_keys() {
        let filters =
            ProductFilters::from_query_pairs(&pairs(&[("color", "red")])).unwrap();
        assert!(filters.name.is_none());
        assert!(!filters.has_price_bounds());
    }
}
