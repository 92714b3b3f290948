//! Inventory ledger: stock movements and valuation on top of the catalog.
//!
//! Stock lives on the catalog's products; this crate owns the rules for
//! changing it (receptions, withdrawals) and the reports derived from it.

pub mod ledger;
pub mod report;

pub use ledger::InventoryLedger;
pub use report::{InventoryReport, LowStockReport, ReportLine};
