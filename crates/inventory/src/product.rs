use serde::{Deserialize, Serialize};

use paintstock_core::ProductId;

/// A stocked product.
///
/// `stock` is only ever changed through sale/procurement recording (or seeded
/// at creation), so it mirrors the ledger of activity for this product.
/// `barcode` is intended to be unique per product but is deliberately not
/// enforced as such.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub barcode: String,
    pub name: String,
    pub company: String,
    pub stock: u32,
}

impl Product {
    /// Whether this product's stock is strictly below `threshold`.
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock < threshold
    }

    /// Case-insensitive substring match against name or barcode.
    ///
    /// An empty term never matches; search fields start blank and should not
    /// list the whole catalog.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return false;
        }
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.barcode.to_lowercase().contains(&term)
    }
}
