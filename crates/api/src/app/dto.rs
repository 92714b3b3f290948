use serde::{Deserialize, Serialize};

use minimarket_core::ProductId;

// -------------------------
// Query DTOs
// -------------------------

/// `?quantity=N` on stock movements. Signed so that `0` and negative values
/// reach the ledger and get a domain error instead of a parse error.
#[derive(Debug, Deserialize)]
pub struct QuantityQuery {
    pub quantity: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct LowStockQuery {
    pub limit: Option<u64>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub id: ProductId,
    pub message: String,
}

impl DeletedResponse {
    pub fn new(id: ProductId) -> Self {
        let message = format!("product {id} deleted");
        Self { id, message }
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
}
