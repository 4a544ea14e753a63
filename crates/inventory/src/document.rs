//! The persisted Document and its mutation/query rules.
//!
//! All constraint enforcement lives here so that every caller (store, tests,
//! any future UI) gets identical guarantees. Methods validate fully before
//! mutating; a returned error means the Document is unchanged.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use paintstock_core::{ProcurementId, ProductId, SaleId, StoreError, StoreResult};

use crate::activity::{Procurement, Sale};
use crate::product::Product;
use crate::report::{Activity, ActivityLine, DeleteImpact, Summary};

/// Stock level below which a product counts as "low stock".
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// The complete persisted state: products plus the sale/procurement logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub products: Vec<Product>,
    pub sales: Vec<Sale>,
    pub procurements: Vec<Procurement>,
}

impl Document {
    /// An empty Document (no products, no activity).
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            sales: Vec::new(),
            procurements: Vec::new(),
        }
    }

    /// The fixed first-run sample data: three paint products, one historical
    /// sale and one historical procurement.
    pub fn seed() -> Self {
        let white = Product {
            id: ProductId::new(),
            barcode: "123456".to_string(),
            name: "White Paint 1L".to_string(),
            company: "ABC Paints".to_string(),
            stock: 20,
        };
        let red = Product {
            id: ProductId::new(),
            barcode: "123457".to_string(),
            name: "Red Paint 2L".to_string(),
            company: "XYZ Paints".to_string(),
            stock: 3,
        };
        let blue = Product {
            id: ProductId::new(),
            barcode: "123458".to_string(),
            name: "Blue Paint 1L".to_string(),
            company: "ABC Paints".to_string(),
            stock: 8,
        };

        let sale = Sale {
            id: SaleId::new(),
            product_id: white.id,
            qty: 2,
            date: Utc.with_ymd_and_hms(2025, 10, 30, 12, 30, 0).unwrap(),
        };
        let procurement = Procurement {
            id: ProcurementId::new(),
            product_id: white.id,
            qty: 10,
            date: Utc.with_ymd_and_hms(2025, 10, 29, 9, 45, 0).unwrap(),
        };

        Self {
            products: vec![white, red, blue],
            sales: vec![sale],
            procurements: vec![procurement],
        }
    }

    /// Look up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn product_mut(&mut self, id: ProductId) -> StoreResult<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::product_not_found(id))
    }

    /// Add a product with a seeded initial stock.
    ///
    /// `barcode`, `name` and `company` must be non-empty after trimming (the
    /// trimmed values are what gets stored); `initial_stock` must be at least
    /// one. Barcode uniqueness is intentionally not checked.
    pub fn add_product(
        &mut self,
        barcode: &str,
        name: &str,
        company: &str,
        initial_stock: u32,
    ) -> StoreResult<ProductId> {
        let barcode = barcode.trim();
        let name = name.trim();
        let company = company.trim();

        if barcode.is_empty() {
            return Err(StoreError::validation("barcode cannot be empty"));
        }
        if name.is_empty() {
            return Err(StoreError::validation("name cannot be empty"));
        }
        if company.is_empty() {
            return Err(StoreError::validation("company cannot be empty"));
        }
        if initial_stock == 0 {
            return Err(StoreError::validation(
                "initial stock must be a positive quantity",
            ));
        }

        let id = ProductId::new();
        self.products.push(Product {
            id,
            barcode: barcode.to_string(),
            name: name.to_string(),
            company: company.to_string(),
            stock: initial_stock,
        });
        Ok(id)
    }

    /// Count the sales/procurements a deletion of `id` would cascade to,
    /// without mutating anything.
    pub fn delete_impact(&self, id: ProductId) -> StoreResult<DeleteImpact> {
        if self.product(id).is_none() {
            return Err(StoreError::product_not_found(id));
        }
        Ok(DeleteImpact {
            sales_removed: self.sales.iter().filter(|s| s.product_id == id).count(),
            procurements_removed: self
                .procurements
                .iter()
                .filter(|p| p.product_id == id)
                .count(),
        })
    }

    /// Hard-delete a product, cascading to every sale and procurement that
    /// references it. Non-recoverable.
    pub fn delete_product(&mut self, id: ProductId) -> StoreResult<DeleteImpact> {
        let impact = self.delete_impact(id)?;

        self.products.retain(|p| p.id != id);
        self.sales.retain(|s| s.product_id != id);
        self.procurements.retain(|p| p.product_id != id);

        Ok(impact)
    }

    /// Record a sale of `qty` units, stamped `at`.
    ///
    /// Rejects a quantity of zero and any quantity exceeding the product's
    /// current stock; on success the stock is decremented and a Sale appended.
    pub fn record_sale(
        &mut self,
        product_id: ProductId,
        qty: u32,
        at: DateTime<Utc>,
    ) -> StoreResult<SaleId> {
        let product = self.product_mut(product_id)?;

        if qty == 0 {
            return Err(StoreError::validation("quantity must be positive"));
        }
        if qty > product.stock {
            return Err(StoreError::InsufficientStock {
                requested: qty,
                available: product.stock,
            });
        }

        product.stock -= qty;
        let id = SaleId::new();
        self.sales.push(Sale {
            id,
            product_id,
            qty,
            date: at,
        });
        Ok(id)
    }

    /// Record a procurement of `qty` units, stamped `at`.
    ///
    /// No business upper bound on quantity; the only rejection besides a zero
    /// quantity is a sum that would not fit in the stock counter.
    pub fn record_procurement(
        &mut self,
        product_id: ProductId,
        qty: u32,
        at: DateTime<Utc>,
    ) -> StoreResult<ProcurementId> {
        let product = self.product_mut(product_id)?;

        if qty == 0 {
            return Err(StoreError::validation("quantity must be positive"));
        }

        product.stock = product.stock.checked_add(qty).ok_or_else(|| {
            StoreError::validation("stock would exceed the representable maximum")
        })?;
        let id = ProcurementId::new();
        self.procurements.push(Procurement {
            id,
            product_id,
            qty,
            date: at,
        });
        Ok(id)
    }

    /// Products with stock strictly below `threshold`, in storage order.
    pub fn low_stock(&self, threshold: u32) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_low_stock(threshold))
            .collect()
    }

    /// Products whose name or barcode contains `term` (case-insensitive).
    /// An empty term yields an empty list.
    pub fn products_matching(&self, term: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.matches(term)).collect()
    }

    /// Dashboard aggregates; low stock is counted at [`LOW_STOCK_THRESHOLD`].
    pub fn summary(&self) -> Summary {
        Summary {
            total_products: self.products.len(),
            total_stock_units: self.products.iter().map(|p| u64::from(p.stock)).sum(),
            low_stock_count: self.low_stock(LOW_STOCK_THRESHOLD).len(),
        }
    }

    /// Sales and procurements recorded between 00:00:00 on `start` and
    /// 23:59:59.999 on `end` (both calendar days inclusive), joined with
    /// their product's name.
    pub fn activity_in_range(&self, start: NaiveDate, end: NaiveDate) -> Activity {
        let from = start.and_hms_opt(0, 0, 0).unwrap().and_utc();
        let to = end.and_hms_milli_opt(23, 59, 59, 999).unwrap().and_utc();

        let sales = self
            .sales
            .iter()
            .filter(|s| s.date >= from && s.date <= to)
            .filter_map(|s| {
                self.join_line(s.product_id, s.qty, s.date, "sale")
            })
            .collect();
        let procurements = self
            .procurements
            .iter()
            .filter(|p| p.date >= from && p.date <= to)
            .filter_map(|p| {
                self.join_line(p.product_id, p.qty, p.date, "procurement")
            })
            .collect();

        Activity {
            sales,
            procurements,
        }
    }

    fn join_line(
        &self,
        product_id: ProductId,
        qty: u32,
        date: DateTime<Utc>,
        kind: &str,
    ) -> Option<ActivityLine> {
        match self.product(product_id) {
            Some(product) => Some(ActivityLine {
                product_id,
                product_name: product.name.clone(),
                qty,
                date,
            }),
            None => {
                // Cascade delete keeps references intact; this can only
                // happen with a hand-edited blob.
                tracing::warn!(%product_id, kind, "activity references a missing product, skipping");
                None
            }
        }
    }
}
