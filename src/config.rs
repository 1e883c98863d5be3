use std::path::{Path, PathBuf};

use crate::error::{MaintenanceError, Result};

/// Location of the merchant database, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "data/merchant.db";

/// Table whose catalog entries are inspected and indexed.
pub const MARKETS_TABLE: &str = "markets";

/// Name of the unique index over the provider/market identity pair.
pub const PROVIDER_MARKET_INDEX: &str = "idx_provider_market";

/// Columns covered by [`PROVIDER_MARKET_INDEX`], in index order.
pub const PROVIDER_MARKET_COLUMNS: [&str; 2] = ["provider_id", "external_id"];

/// SQLite maintenance configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
}

impl SqliteConfig {
    /// Create a config pointing at the given database file
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Absolute form of the configured path. The file does not need to exist.
    pub fn resolved_path(&self) -> Result<PathBuf> {
        std::path::absolute(&self.db_path).map_err(MaintenanceError::Path)
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}
