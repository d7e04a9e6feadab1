use serde::{Deserialize, Serialize};

/// A catalog product as the upstream emits it.
///
/// Field names mirror the upstream JSON exactly, a mix of Serbian
/// snake_case and camelCase. `sif_product` is the unique identifier and
/// is string-typed on the wire even though conceptually numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product name.
    pub naziv: String,

    pub sku: String,

    pub ean: Option<String>,

    /// Non-negative decimal price.
    pub price: f64,

    pub vat: String,

    pub stock: String,

    pub description: Option<String>,

    pub imgsrc: String,

    /// Category id, when the product is categorized.
    pub sif_productcategory: Option<String>,

    /// Brand id, when the product has a brand.
    pub sif_productbrand: Option<String>,

    /// Unique product identifier.
    pub sif_product: String,

    #[serde(rename = "categoryName")]
    pub category_name: Option<String>,

    #[serde(rename = "brandName")]
    pub brand_name: Option<String>,
}
