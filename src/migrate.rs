//! Drop-and-recreate of the provider/market unique index.

use std::fmt;
use std::io::{self, Write};

use crate::config::{SqliteConfig, MARKETS_TABLE, PROVIDER_MARKET_COLUMNS, PROVIDER_MARKET_INDEX};
use crate::error::{MaintenanceError, Result};
use crate::sqlite::{Database, IndexDefinition};

/// Rebuilds one index inside a single transaction.
///
/// Duplicate keys are not checked up front: the engine rejects the `CREATE`
/// and the transaction is rolled back, so a previous index of the same name
/// survives a failed run.
#[derive(Debug, Clone)]
pub struct IndexMigrator {
    config: SqliteConfig,
    index: IndexDefinition,
}

impl IndexMigrator {
    pub fn new(config: SqliteConfig, index: IndexDefinition) -> Self {
        Self { config, index }
    }

    /// `UNIQUE (provider_id, external_id)` on `markets`.
    pub fn provider_market(config: SqliteConfig) -> Self {
        let index = IndexDefinition::new(PROVIDER_MARKET_INDEX, MARKETS_TABLE)
            .with_columns(PROVIDER_MARKET_COLUMNS)
            .unique();
        Self::new(config, index)
    }

    pub fn index(&self) -> &IndexDefinition {
        &self.index
    }

    /// Drop the index if present, create it again and commit.
    ///
    /// Progress lines are written to `out` before each step. A failed write
    /// aborts the rebuild as [`MaintenanceError::Output`] without committing.
    pub fn rebuild(&self, out: &mut impl Write) -> Result<()> {
        let path = self.config.resolved_path()?;
        let mut db = Database::open_existing(&path)?;
        progress(out, format_args!("Connecting to database at {}", path.display()))?;

        let tx = db.transaction()?;

        progress(out, format_args!("Dropping index '{}'...", self.index.name))?;
        let drop_sql = self.index.drop_sql();
        tracing::debug!(sql = %drop_sql, "executing");
        tx.execute_batch(&drop_sql)?;

        let kind = if self.index.unique { "unique index" } else { "index" };
        progress(
            out,
            format_args!(
                "Creating {} '{}' on {}...",
                kind,
                self.index.name,
                self.index.column_list()
            ),
        )?;
        let create_sql = self.index.create_sql();
        tracing::debug!(sql = %create_sql, "executing");
        tx.execute_batch(&create_sql)?;

        tx.commit()?;
        tracing::info!(index = %self.index.name, path = %path.display(), "index rebuilt");
        Ok(())
    }
}

fn progress(out: &mut impl Write, line: fmt::Arguments<'_>) -> Result<()> {
    writeln!(out, "{line}").map_err(MaintenanceError::Output)
}

/// Rebuild `idx_provider_market` and print the outcome to `out`.
///
/// Engine failures are reported, not returned; nothing is committed in that
/// case. Only a failed write to `out` is an error.
pub fn run(config: &SqliteConfig, out: &mut impl Write) -> io::Result<()> {
    let migrator = IndexMigrator::provider_market(config.clone());
    match migrator.rebuild(out) {
        Ok(()) => writeln!(out, "Index updated successfully."),
        Err(MaintenanceError::Output(err)) => Err(err),
        Err(err) => {
            tracing::warn!(error = %err, index = %migrator.index().name, "index rebuild rolled back");
            writeln!(out, "An error occurred: {err}")
        }
    }
}
