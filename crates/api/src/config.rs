//! Process configuration: command-line flags with environment fallbacks.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use minimarket_observability::LogFormat;

/// Default threshold for low-stock alerts.
pub const DEFAULT_LOW_STOCK_LIMIT: u64 = 5;

#[derive(Debug, Clone, Parser)]
#[command(name = "minimarket-api", about = "Minimarket catalog and inventory API")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "MINIMARKET_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// JSON file holding the catalog. Created on first write.
    #[arg(long, env = "MINIMARKET_DATA_FILE", default_value = "data/catalog.json")]
    pub data_file: PathBuf,

    /// Keep the catalog in memory only (nothing survives a restart).
    #[arg(long, env = "MINIMARKET_IN_MEMORY")]
    pub in_memory: bool,

    /// Log output: `json` or `pretty`.
    #[arg(long, env = "MINIMARKET_LOG_FORMAT", default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,

    /// Stock level at or below which a product is reported as low.
    #[arg(long, env = "MINIMARKET_LOW_STOCK_LIMIT", default_value_t = DEFAULT_LOW_STOCK_LIMIT)]
    pub low_stock_limit: u64,
}
