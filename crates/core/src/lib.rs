//! `paintstock-core` — shared store primitives.
//!
//! This crate contains **pure** building blocks (ids, errors) with no
//! persistence or IO concerns.

pub mod error;
pub mod id;

pub use error::{StoreError, StoreResult};
pub use id::{ProcurementId, ProductId, SaleId};
