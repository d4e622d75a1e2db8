use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("dataset contains no observations")]
    EmptyInput,

    #[error("no observations fall in the requested group: {0}")]
    EmptyGroup(String),

    #[error("observations are out of chronological order at row {row}")]
    UnsortedInput { row: usize },

    #[error("weekly analysis needs {required} leading days, but the dataset has {actual}")]
    InsufficientData { required: usize, actual: usize },
}
