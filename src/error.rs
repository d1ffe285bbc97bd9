use thiserror::Error;

/// Errors raised at the crate's I/O and index boundaries.
///
/// Table text itself never fails to parse: malformed input degrades to a
/// smaller or empty grid instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid utf-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("row index {index} out of range (row count {len})")]
    RowOutOfRange { index: usize, len: usize },

    #[error("column index {index} out of range (column count {len})")]
    ColumnOutOfRange { index: usize, len: usize },

    #[error("invalid fenced block: {0}")]
    Fence(String),
}

impl Error {
    pub fn row_out_of_range(index: usize, len: usize) -> Self {
        Error::RowOutOfRange { index, len }
    }

    pub fn column_out_of_range(index: usize, len: usize) -> Self {
        Error::ColumnOutOfRange { index, len }
    }

    pub fn fence(message: impl Into<String>) -> Self {
        Error::Fence(message.into())
    }

    /// Whether the error came from a caller-supplied grid index.
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            Error::RowOutOfRange { .. } | Error::ColumnOutOfRange { .. }
        )
    }
}
