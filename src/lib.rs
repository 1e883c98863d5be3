//! Schema inspection and index maintenance for the merchant SQLite database.
//!
//! # Intention
//!
//! - Report the stored definition of the `markets` table and its indices.
//! - Rebuild the `idx_provider_market` unique index in a single transaction.
//!
//! # Architectural Boundaries
//!
//! - Only catalog reads and index DDL belong here.
//! - The table itself and its rows are owned by the ingestion side and are
//!   never created, altered or written.

pub mod config;
pub mod error;
pub mod inspect;
pub mod migrate;
pub mod sqlite;

pub use config::SqliteConfig;
pub use error::{MaintenanceError, Result};

use tracing_subscriber::filter::LevelFilter;

/// Install the stderr log subscriber used by the binaries.
///
/// Stdout is reserved for the report text, so logs never go there. Logging is
/// off unless `RUST_LOG` enables it, keeping stderr empty on a normal run.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}
