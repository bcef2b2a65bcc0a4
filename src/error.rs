use thiserror::Error;

/// Failures of the regression metrics. Kept separate from [`Error`] so a caller
/// evaluating predictions can match on exactly these three conditions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricError {
    #[error("truth has {truth} values but predicted has {predicted}")]
    ShapeMismatch { truth: usize, predicted: usize },

    #[error("cannot compute a metric over zero observations")]
    EmptyInput,

    /// Every true value is identical, so the total sum of squares is zero.
    #[error("target has no variance; R² is undefined")]
    DegenerateInput,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Metric(#[from] MetricError),

    #[error("dimension mismatch: expected {expected}, found {actual}")]
    DimensionMismatch { expected: String, actual: String },

    #[error("matrix is singular; features are linearly dependent")]
    SingularMatrix,

    #[error("{rows} rows cannot determine {parameters} parameters")]
    Underdetermined { rows: usize, parameters: usize },

    #[error("column `{0}` does not exist")]
    MissingColumn(String),

    #[error("column `{0}` is not numeric")]
    NotNumeric(String),

    #[error("column `{0}` appears more than once")]
    DuplicateColumn(String),

    #[error("invalid split of {count} rows with test fraction {fraction}")]
    InvalidSplit { count: usize, fraction: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("config parse: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
