use thiserror::Error;

/// Errors raised while loading or aggregating progress records.
#[derive(Debug, Error)]
pub enum DataError {
    /// A record is malformed or out of range (non-positive semester,
    /// negative or non-numeric credits, ...).
    #[error("Invalid input{}: {reason}", .row.map(|r| format!(" in row {r}")).unwrap_or_default())]
    InvalidInput { row: Option<usize>, reason: String },

    /// No records survived filtering.
    #[error("No records left after filtering")]
    EmptyInput,

    /// A required column is absent from the source file.
    #[error("Missing column: '{0}'")]
    MissingField(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl DataError {
    pub fn invalid(row: Option<usize>, reason: impl Into<String>) -> Self {
        DataError::InvalidInput {
            row,
            reason: reason.into(),
        }
    }
}

/// Result type for the data layer.
pub type Result<T> = std::result::Result<T, DataError>;
