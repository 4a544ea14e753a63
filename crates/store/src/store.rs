//! The Store: single source of truth for the persisted Document.
//!
//! Every operation is a complete load -> validate -> mutate -> persist
//! sequence run under one mutual-exclusion guard, so invariants hold even if
//! the store is shared across threads. Persistence is whole-document: there
//! are no partial writes.

use std::sync::Mutex;

use chrono::{NaiveDate, Utc};

use paintstock_core::{ProcurementId, ProductId, SaleId, StoreError, StoreResult};
use paintstock_inventory::{Activity, DeleteImpact, Document, Product, Summary};

use crate::backend::{FileBackend, MemoryBackend, StorageBackend};

/// Document store over a pluggable blob backend.
pub struct Store<B: StorageBackend> {
    backend: B,
    // Serializes read-modify-write sequences; queries take it too so they
    // never observe a half-persisted document.
    guard: Mutex<()>,
}

impl Store<MemoryBackend> {
    /// Store backed by process memory (tests, throwaway sessions).
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }
}

impl Store<FileBackend> {
    /// Store backed by a JSON file at `path`.
    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(FileBackend::new(path))
    }

    /// Store backed by the default OS data location.
    pub fn open_default() -> StoreResult<Self> {
        Ok(Self::new(FileBackend::at_default_path()?))
    }
}

impl<B: StorageBackend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            guard: Mutex::new(()),
        }
    }

    /// Return the current Document, seeding one on first run.
    ///
    /// A corrupt blob is replaced with a fresh seed rather than propagated:
    /// there is no recovery source to fall back on, so the store logs the
    /// loss and starts over.
    pub fn load(&self) -> StoreResult<Document> {
        let _guard = self.guard.lock().unwrap();
        self.load_unlocked()
    }

    /// Persist `doc` in full, replacing any prior value.
    pub fn save(&self, doc: &Document) -> StoreResult<()> {
        let _guard = self.guard.lock().unwrap();
        self.save_unlocked(doc)
    }

    /// Drop all data and return a freshly seeded Document.
    pub fn clear_all(&self) -> StoreResult<Document> {
        let _guard = self.guard.lock().unwrap();
        self.backend.clear()?;
        tracing::info!("all data cleared");
        self.reseed()
    }

    /// Add a product with a seeded initial stock; returns its fresh id.
    pub fn add_product(
        &self,
        barcode: &str,
        name: &str,
        company: &str,
        initial_stock: u32,
    ) -> StoreResult<ProductId> {
        let _guard = self.guard.lock().unwrap();
        let mut doc = self.load_unlocked()?;
        let id = doc.add_product(barcode, name, company, initial_stock)?;
        self.save_unlocked(&doc)?;
        tracing::info!(%id, initial_stock, "product added");
        Ok(id)
    }

    /// Delete a product, cascading to all of its sales and procurements.
    pub fn delete_product(&self, id: ProductId) -> StoreResult<DeleteImpact> {
        let _guard = self.guard.lock().unwrap();
        let mut doc = self.load_unlocked()?;
        let impact = doc.delete_product(id)?;
        self.save_unlocked(&doc)?;
        tracing::info!(
            %id,
            sales_removed = impact.sales_removed,
            procurements_removed = impact.procurements_removed,
            "product deleted"
        );
        Ok(impact)
    }

    /// Count the records a `delete_product(id)` would remove, so a caller can
    /// warn the user before committing to the cascade.
    pub fn delete_impact(&self, id: ProductId) -> StoreResult<DeleteImpact> {
        let _guard = self.guard.lock().unwrap();
        self.load_unlocked()?.delete_impact(id)
    }

    /// Record a sale, stamped with the current time.
    pub fn record_sale(&self, product_id: ProductId, qty: u32) -> StoreResult<SaleId> {
        let _guard = self.guard.lock().unwrap();
        let mut doc = self.load_unlocked()?;
        let id = doc.record_sale(product_id, qty, Utc::now())?;
        self.save_unlocked(&doc)?;
        tracing::info!(%product_id, qty, "sale recorded");
        Ok(id)
    }

    /// Record a procurement (restock), stamped with the current time.
    pub fn record_procurement(&self, product_id: ProductId, qty: u32) -> StoreResult<ProcurementId> {
        let _guard = self.guard.lock().unwrap();
        let mut doc = self.load_unlocked()?;
        let id = doc.record_procurement(product_id, qty, Utc::now())?;
        self.save_unlocked(&doc)?;
        tracing::info!(%product_id, qty, "procurement recorded");
        Ok(id)
    }

    /// Products with stock strictly below `threshold`, in storage order.
    pub fn low_stock(&self, threshold: u32) -> StoreResult<Vec<Product>> {
        let _guard = self.guard.lock().unwrap();
        let doc = self.load_unlocked()?;
        Ok(doc.low_stock(threshold).into_iter().cloned().collect())
    }

    /// Products whose name or barcode contains `term` (case-insensitive).
    pub fn products_matching(&self, term: &str) -> StoreResult<Vec<Product>> {
        let _guard = self.guard.lock().unwrap();
        let doc = self.load_unlocked()?;
        Ok(doc.products_matching(term).into_iter().cloned().collect())
    }

    /// Dashboard aggregates.
    pub fn summary(&self) -> StoreResult<Summary> {
        let _guard = self.guard.lock().unwrap();
        Ok(self.load_unlocked()?.summary())
    }

    /// Sales and procurements recorded within the inclusive calendar-day
    /// range, joined with product names.
    pub fn activity_in_range(&self, start: NaiveDate, end: NaiveDate) -> StoreResult<Activity> {
        let _guard = self.guard.lock().unwrap();
        Ok(self.load_unlocked()?.activity_in_range(start, end))
    }

    fn load_unlocked(&self) -> StoreResult<Document> {
        match self.backend.load()? {
            None => {
                tracing::info!("no persisted document found, seeding");
                self.reseed()
            }
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(doc) => Ok(doc),
                Err(err) => {
                    tracing::warn!(%err, "persisted document is corrupt, reseeding");
                    self.reseed()
                }
            },
        }
    }

    fn save_unlocked(&self, doc: &Document) -> StoreResult<()> {
        let blob = serde_json::to_string(doc)
            .map_err(|err| StoreError::storage(format!("serialize document: {err}")))?;
        self.backend.save(&blob)?;
        Ok(())
    }

    fn reseed(&self) -> StoreResult<Document> {
        let doc = Document::seed();
        self.save_unlocked(&doc)?;
        Ok(doc)
    }
}
