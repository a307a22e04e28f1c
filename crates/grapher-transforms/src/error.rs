pub type TransformResult<T> = Result<T, TransformError>;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TransformError {
    #[error("transform not found in directive `{directive}`")]
    UnknownTransform { directive: String },

    #[error("directive `{directive}` names more than one transform: {}", names.join(", "))]
    AmbiguousTransform {
        directive: String,
        names: Vec<&'static str>,
    },

    #[error("{transform} expects {expected} parameters ({signature}), got {actual}")]
    Arity {
        transform: &'static str,
        signature: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid {parameter} for {transform}: `{value}` ({reason})")]
    InvalidParameter {
        transform: &'static str,
        parameter: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("column length mismatch for {column}: expected {expected} values, got {actual}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid time value {value} in {column} at row {row}")]
    InvalidTime {
        column: String,
        row: usize,
        value: String,
    },

    #[error("filling the time gap of {gap} steps in {column} at row {row} exceeds the gap-fill limit")]
    TimeGapTooLarge {
        column: String,
        row: usize,
        gap: u64,
    },

    #[error("dependency cycle: {}", cycle.join(" -> "))]
    DependencyCycle { cycle: Vec<String> },
}
