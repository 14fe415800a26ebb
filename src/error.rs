//! Error types for the composable-taxa library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum TaxaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed taxon '{raw}': {reason}")]
    Parse { raw: String, reason: String },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Row {row} has {actual} samples, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Sample column {column} sums to zero, cannot compute relative abundance")]
    DegenerateColumn { column: usize },

    #[error("Taxon '{taxon}' is not classified to rank level {level} (depth: {depth:?})")]
    RankDepth {
        taxon: String,
        level: usize,
        /// Deepest classified level, `None` when no rank is classified.
        depth: Option<usize>,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaxaError {
    pub(crate) fn parse(raw: &str, reason: impl Into<String>) -> Self {
        TaxaError::Parse {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, TaxaError>;
