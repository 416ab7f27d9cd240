/// Errors raised while producing or replaying a trace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    #[error("Unknown sorting algorithm: {0:?}")]
    InvalidAlgorithm(String),
    #[error("Event index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
