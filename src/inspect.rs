//! Read-only report of one table's stored definition and its indices.

use std::fmt;
use std::io::{self, Write};

use crate::config::{SqliteConfig, MARKETS_TABLE};
use crate::error::{MaintenanceError, Result};
use crate::sqlite::{self, CatalogEntry, Database};

/// Catalog snapshot for a single table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaReport {
    pub table: String,
    /// Stored `CREATE TABLE` text, `None` when the table does not exist.
    pub table_sql: Option<String>,
    pub indices: Vec<CatalogEntry>,
}

impl fmt::Display for SchemaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table_sql {
            Some(sql) => {
                writeln!(f, "--- CREATE TABLE Statement ---")?;
                writeln!(f, "{sql}")?;
            }
            None => writeln!(f, "Table '{}' not found.", self.table)?,
        }

        writeln!(f)?;
        writeln!(f, "--- Indices ---")?;
        if self.indices.is_empty() {
            return writeln!(f, "No indices found.");
        }
        for index in &self.indices {
            writeln!(f, "Index: {}", index.name)?;
            writeln!(f, "SQL: {}", index.sql.as_deref().unwrap_or("(none)"))?;
        }
        Ok(())
    }
}

/// Collect the catalog entries for `table`.
///
/// The file must already exist; no connection is attempted otherwise.
pub fn inspect_table(config: &SqliteConfig, table: &str) -> Result<SchemaReport> {
    let path = config.path();
    if !path.exists() {
        return Err(MaintenanceError::DatabaseNotFound(path.to_path_buf()));
    }

    let db = Database::open_read_only(path)?;
    let table_sql = sqlite::table_sql(db.connection(), table)?;
    let indices = sqlite::table_indices(db.connection(), table)?;
    tracing::debug!(
        table,
        found = table_sql.is_some(),
        indices = indices.len(),
        "read catalog"
    );

    Ok(SchemaReport {
        table: table.to_string(),
        table_sql,
        indices,
    })
}

/// Inspect the `markets` table and print the report, or a diagnostic, to `out`.
///
/// Failures are reported rather than returned; only a failed write to `out`
/// is an error.
pub fn run(config: &SqliteConfig, out: &mut impl Write) -> io::Result<()> {
    match inspect_table(config, MARKETS_TABLE) {
        Ok(report) => write!(out, "{report}"),
        Err(err @ MaintenanceError::DatabaseNotFound(_)) => {
            tracing::warn!(path = %config.path().display(), "database file missing");
            writeln!(out, "Error: {err}")
        }
        Err(err) => {
            tracing::warn!(error = %err, "schema inspection failed");
            writeln!(out, "SQLite error: {err}")
        }
    }
}
