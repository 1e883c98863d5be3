use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MaintenanceError>;

#[derive(Debug, Error)]
pub enum MaintenanceError {
    #[error("Database not found at {}", .0.display())]
    DatabaseNotFound(PathBuf),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("could not resolve database path: {0}")]
    Path(#[source] std::io::Error),

    /// Writing the progress or report text failed.
    #[error("could not write output: {0}")]
    Output(#[source] std::io::Error),
}
