use konovo_api::types::{Product, TokenResponse};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_products_full() {
    let json = load_fixture("products.json");
    let products: Vec<Product> = serde_json::from_str(&json).unwrap();
    assert_eq!(products.len(), 3);

    let monitor = &products[0];
    assert_eq!(monitor.naziv, "Dell P2422H 24\" IPS monitor");
    assert_eq!(monitor.sku, "DL-P2422H");
    assert_eq!(monitor.ean.as_deref(), Some("5397184504963"));
    assert_eq!(monitor.price, 21990.0);
    assert_eq!(monitor.sif_product, "1001");
    assert_eq!(monitor.sif_productcategory.as_deref(), Some("5"));
    assert_eq!(monitor.sif_productbrand.as_deref(), Some("12"));
    assert_eq!(monitor.category_name.as_deref(), Some("Monitori"));
    assert_eq!(monitor.brand_name.as_deref(), Some("Dell"));

    let ram = &products[2];
    assert!(ram.ean.is_some());
    assert!(ram.description.is_none());
    assert!(ram.sif_productcategory.is_none());
    assert!(ram.category_name.is_none());
}

#[test]
fn deserialize_products_empty() {
    let json = load_fixture("products_empty.json");
    let products: Vec<Product> = serde_json::from_str(&json).unwrap();
    assert!(products.is_empty());
}

#[test]
fn serialize_product_uses_wire_names() {
    let json = load_fixture("products.json");
    let products: Vec<Product> = serde_json::from_str(&json).unwrap();
    let out = serde_json::to_value(&products[0]).unwrap();
    assert!(out.get("categoryName").is_some());
    assert!(out.get("brandName").is_some());
    assert!(out.get("category_name").is_none());
    assert_eq!(out["naziv"], "Dell P2422H 24\" IPS monitor");
}

#[test]
fn deserialize_token_response() {
    let token: TokenResponse = serde_json::from_str(r#"{"token":"abc.def.ghi"}"#).unwrap();
    assert_eq!(token.token, "abc.def.ghi");
}
