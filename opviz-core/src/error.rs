//! Error types for opviz-core.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for opviz operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for loading and lookup operations.
#[derive(Error, Debug)]
pub enum Error {
    /// An input artifact could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The candidate table failed to parse.
    #[error("candidate table parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The lookup table failed to parse.
    #[error("lookup table parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A SMILES key has no depiction asset in the lookup table.
    #[error("no depiction asset for SMILES {smiles:?}")]
    MissingAsset { smiles: String },
}
