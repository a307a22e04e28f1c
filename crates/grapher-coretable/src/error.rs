pub type TableResult<T> = Result<T, TableError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("duplicate column: {column}")]
    DuplicateColumn { column: String },

    #[error("column length mismatch for {column}: expected {expected} values, got {actual}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}
