//! Derived inventory reports. Recomputed on demand, never stored.

use serde::Serialize;

use minimarket_catalog::Product;
use minimarket_core::{Entity, ProductId};

/// Valuation of one product: `line_value = quantity × unit_price`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLine {
    pub id: ProductId,
    pub name: String,
    pub quantity: u64,
    pub unit_price: f64,
    pub line_value: f64,
}

impl From<&Product> for ReportLine {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id().clone(),
            name: p.name().to_string(),
            quantity: p.stock_quantity(),
            unit_price: p.unit_price().value(),
            line_value: p.line_value(),
        }
    }
}

/// Total inventory value with a per-product breakdown in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryReport {
    #[serde(rename = "totalInventoryValue")]
    pub total_value: f64,
    pub items: Vec<ReportLine>,
}

impl InventoryReport {
    pub fn from_products(products: &[Product]) -> Self {
        let items: Vec<ReportLine> = products.iter().map(ReportLine::from).collect();
        let total_value = items.iter().map(|l| l.line_value).sum();
        Self { total_value, items }
    }

    pub fn line(&self, id: &ProductId) -> Option<&ReportLine> {
        self.items.iter().find(|l| &l.id == id)
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|l| l.quantity).sum()
    }
}

/// Products at or below a stock threshold, lowest stock first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockReport {
    pub limit: u64,
    pub items: Vec<Product>,
}

impl LowStockReport {
    pub fn from_products(products: Vec<Product>, limit: u64) -> Self {
        let mut items: Vec<Product> = products
            .into_iter()
            .filter(|p| p.stock_quantity() <= limit)
            .collect();
        // Stable: ties keep catalog order.
        items.sort_by_key(|p| p.stock_quantity());
        Self { limit, items }
    }
}
