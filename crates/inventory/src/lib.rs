//! Inventory domain model for the paint-stock tracker.
//!
//! This crate contains the Document data model and every mutation/query rule,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod activity;
pub mod document;
pub mod product;
pub mod report;

pub use activity::{Procurement, Sale};
pub use document::{Document, LOW_STOCK_THRESHOLD};
pub use product::Product;
pub use report::{Activity, ActivityLine, DeleteImpact, Summary};
