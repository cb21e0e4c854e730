use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("field `{field}` is missing on record {record_index}")]
    MissingField { field: String, record_index: usize },

    #[error("field `{field}` on record {record_index} is not a finite number")]
    NonNumericValue { field: String, record_index: usize },

    #[error("dataset is empty")]
    EmptyDataset,

    #[error("chart view is not mounted")]
    NotMounted,

    #[error("chart disposal failed: {0}")]
    Disposal(String),

    #[error("engine error: {0}")]
    Engine(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
