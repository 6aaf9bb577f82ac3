use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while scanning price files and exporting the catalog.
///
/// Row- and file-level variants are recovered by the scanner (the row or file
/// is skipped and counted); only a directory that cannot be listed at all, or
/// an export that cannot be written, reaches the caller.
#[derive(Debug, Error)]
pub enum PriceError {
    /// The header has no recognisable price or weight column.
    #[error("{file}: header has no {column} column")]
    MissingColumn { file: String, column: &'static str },

    /// A data row is too short, has no product column to read from, or holds
    /// a non-integer price/weight.
    #[error("{file}, row {row}: {reason}")]
    MalformedRecord {
        file: String,
        row: usize,
        reason: String,
    },

    /// Weight is zero, so price per unit is undefined.
    #[error("{file}, row {row}: weight is zero")]
    DivisionByZero { file: String, row: usize },

    /// Directory cannot be listed or a file cannot be opened / read.
    #[error("cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The export destination cannot be created or written.
    #[error("cannot write export to {}: {source}", .path.display())]
    MissingTargetFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PriceError>;
