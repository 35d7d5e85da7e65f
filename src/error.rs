use thiserror::Error;

/// Convenience result type for pipeline operations.
pub type TsvResult<T> = Result<T, TsvError>;

/// Error type shared across validation, statistics, and pipeline orchestration.
#[derive(Debug, Error)]
pub enum TsvError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file has no first line, or its first line is empty after trimming.
    #[error("no header: the file is missing its first line")]
    NoHeader,

    /// The first data row's field count does not match the header's.
    #[error("malformed header: header has {expected} field(s) but the first data row has {found}")]
    MalformedHeader { expected: usize, found: usize },

    /// The requested column name is absent from the header.
    ///
    /// Statistics report this per-field and keep computing sibling statistics;
    /// it never aborts a whole run.
    #[error("field '{name}' not found in header")]
    FieldNotFound { name: String },

    /// A statistic divided by zero (average over an empty dataset, standard
    /// deviation over fewer than two rows). Fatal to that one computation only.
    #[error("cannot compute {statistic} over {rows} row(s)")]
    DivisionByZero { statistic: String, rows: usize },

    /// A request was misconfigured (e.g. an empty field name).
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },
}
