//! Query result shapes derived from the Document.

use chrono::{DateTime, Utc};
use serde::Serialize;

use paintstock_core::ProductId;

/// Dashboard aggregates over all products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_products: usize,
    pub total_stock_units: u64,
    pub low_stock_count: usize,
}

/// How many activity records a product deletion would (or did) cascade to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteImpact {
    pub sales_removed: usize,
    pub procurements_removed: usize,
}

/// One sale or procurement line in a report, joined with its product's name
/// at query time (the name is not stored redundantly on the record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub qty: u32,
    pub date: DateTime<Utc>,
}

/// Sales and procurements that fall within a report's date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub sales: Vec<ActivityLine>,
    pub procurements: Vec<ActivityLine>,
}
