//! Black-box tests driving the store the way a presentation layer would.

use paintstock_core::StoreError;
use paintstock_store::{FileBackend, Store};

/// Install the tracing subscriber so store-level seed/reseed logs are visible
/// under RUST_LOG. Idempotent, so every test can call it.
fn init_logging() {
    paintstock_observability::init();
}

#[test]
fn seeded_scenario_end_to_end() {
    init_logging();
    let store = Store::in_memory();
    let doc = store.load().unwrap();
    let white = doc.products[0].id;
    assert_eq!(doc.product(white).unwrap().stock, 20);

    store.record_sale(white, 2).unwrap();
    let doc = store.load().unwrap();
    assert_eq!(doc.product(white).unwrap().stock, 18);
    assert_eq!(doc.sales.len(), 2);

    store.record_procurement(white, 10).unwrap();
    let doc = store.load().unwrap();
    assert_eq!(doc.product(white).unwrap().stock, 28);
    assert_eq!(doc.procurements.len(), 2);

    let green = store.add_product("999", "Green Paint", "ABC", 15).unwrap();
    let doc = store.load().unwrap();
    assert_eq!(doc.products.len(), 4);
    assert_eq!(doc.product(green).unwrap().stock, 15);

    let summary = store.summary().unwrap();
    assert_eq!(summary.total_products, 4);
}

#[test]
fn cascade_delete_through_the_store() {
    init_logging();
    let store = Store::in_memory();
    let doc = store.load().unwrap();
    let white = doc.products[0].id;
    let red = doc.products[1].id;
    store.record_sale(red, 1).unwrap();

    let impact = store.delete_impact(white).unwrap();
    assert_eq!(impact.sales_removed, 1);
    assert_eq!(impact.procurements_removed, 1);

    store.delete_product(white).unwrap();

    let doc = store.load().unwrap();
    assert_eq!(doc.products.len(), 2);
    assert!(doc.sales.iter().all(|s| s.product_id != white));
    assert!(doc.procurements.iter().all(|p| p.product_id != white));
    assert_eq!(doc.sales.len(), 1);

    let err = store.delete_product(white).unwrap_err();
    assert!(matches!(err, StoreError::ProductNotFound(_)));
}

#[test]
fn document_survives_across_store_instances() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");

    let white = {
        let store = Store::open(&path);
        let doc = store.load().unwrap();
        let white = doc.products[0].id;
        store.record_sale(white, 3).unwrap();
        white
    };

    let store = Store::open(&path);
    let doc = store.load().unwrap();
    assert_eq!(doc.product(white).unwrap().stock, 17);
    assert_eq!(doc.sales.len(), 2);
}

#[test]
fn corrupt_file_is_reseeded_with_valid_json() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = Store::open(&path);
    let doc = store.load().unwrap();
    assert_eq!(doc.products.len(), 3);

    // The fallback rewrote the file, so a raw re-read parses cleanly.
    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["products"].as_array().unwrap().len(), 3);
}

#[test]
fn persisted_layout_matches_the_documented_shape() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");

    let store = Store::open(&path);
    store.load().unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let product = &value["products"][0];
    for key in ["id", "barcode", "name", "company", "stock"] {
        assert!(product.get(key).is_some(), "product missing {key}");
    }

    let sale = &value["sales"][0];
    for key in ["id", "productId", "qty", "date"] {
        assert!(sale.get(key).is_some(), "sale missing {key}");
    }
    // Dates persist as ISO-8601 strings.
    assert!(sale["date"].as_str().unwrap().starts_with("2025-10-30T12:30:00"));

    let procurement = &value["procurements"][0];
    assert!(procurement.get("productId").is_some());
}

#[test]
fn default_backend_resolves_a_path() {
    init_logging();
    let backend = FileBackend::at_default_path().unwrap();
    assert!(backend.path().ends_with("paintstock/db.json"));
}
