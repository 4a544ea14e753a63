use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use paintstock_core::{ProcurementId, ProductId, SaleId};

/// A recorded sale. Append-only: never mutated or deleted individually, only
/// removed when its product is cascade-deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: SaleId,
    pub product_id: ProductId,
    pub qty: u32,
    pub date: DateTime<Utc>,
}

/// A recorded procurement (restock). Same lifecycle as [`Sale`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Procurement {
    pub id: ProcurementId,
    pub product_id: ProductId,
    pub qty: u32,
    pub date: DateTime<Utc>,
}
