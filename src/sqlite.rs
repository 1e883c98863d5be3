use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, OptionalExtension, Transaction};

/// Open handle on one database file.
///
/// The underlying connection is closed when the handle is dropped, so every
/// exit path (early return, `?`, success) releases it exactly once.
#[derive(Debug)]
pub struct Database {
    path: PathBuf,
    conn: Connection,
}

impl Database {
    /// Open an existing file without write access.
    pub fn open_read_only(path: &Path) -> rusqlite::Result<Self> {
        Self::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
    }

    /// Open an existing file for writing. Missing files are an error rather
    /// than being created empty.
    pub fn open_existing(path: &Path) -> rusqlite::Result<Self> {
        Self::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
    }

    fn open_with_flags(path: &Path, flags: OpenFlags) -> rusqlite::Result<Self> {
        let conn = Connection::open_with_flags(path, flags)?;
        tracing::debug!(path = %path.display(), ?flags, "opened sqlite connection");
        Ok(Self {
            path: path.to_path_buf(),
            conn,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Start a transaction. Dropping it without `commit` rolls back.
    pub fn transaction(&mut self) -> rusqlite::Result<Transaction<'_>> {
        self.conn.transaction()
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        tracing::debug!(path = %self.path.display(), "closing sqlite connection");
    }
}

/// Row of `sqlite_master` describing one schema object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    /// Stored definition. `None` for objects the engine creates itself, such
    /// as the automatic indices behind `UNIQUE` column constraints.
    pub sql: Option<String>,
}

/// Stored `CREATE TABLE` text for `table`, if the table exists.
pub fn table_sql(conn: &Connection, table: &str) -> rusqlite::Result<Option<String>> {
    conn.query_row(
        "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |row| row.get(0),
    )
    .optional()
}

/// Every index owned by `table`, in catalog order.
pub fn table_indices(conn: &Connection, table: &str) -> rusqlite::Result<Vec<CatalogEntry>> {
    let mut stmt =
        conn.prepare("SELECT name, sql FROM sqlite_master WHERE type = 'index' AND tbl_name = ?1")?;
    let rows = stmt.query_map([table], |row| {
        Ok(CatalogEntry {
            name: row.get(0)?,
            sql: row.get(1)?,
        })
    })?;
    rows.collect()
}

/// Index to be (re)built on a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDefinition {
    pub name: String,
    pub table: String,
    pub columns: Vec<String>,
    pub unique: bool,
}

impl IndexDefinition {
    pub fn new(name: &str, table: &str) -> Self {
        Self {
            name: name.to_string(),
            table: table.to_string(),
            columns: Vec::new(),
            unique: false,
        }
    }

    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Column tuple as written in the DDL, e.g. `(provider_id, external_id)`.
    pub fn column_list(&self) -> String {
        format!("({})", self.columns.join(", "))
    }

    pub fn drop_sql(&self) -> String {
        format!("DROP INDEX IF EXISTS {}", self.name)
    }

    pub fn create_sql(&self) -> String {
        let unique = if self.unique { "UNIQUE " } else { "" };
        format!(
            "CREATE {}INDEX {} ON {} {}",
            unique,
            self.name,
            self.table,
            self.column_list()
        )
    }
}
