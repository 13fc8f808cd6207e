#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("row stride {bytes_per_row} is smaller than width*4 = {min}")]
    StrideTooSmall { bytes_per_row: usize, min: usize },
    #[error("buffer holds {actual} bytes but {required} are needed")]
    BufferTooSmall { required: usize, actual: usize },
    #[error("image geometry overflows usize: {width}x{height}, stride {bytes_per_row}")]
    GeometryOverflow {
        width: usize,
        height: usize,
        bytes_per_row: usize,
    },
    #[error("image sizes differ: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("unknown deficiency: {0}")]
    UnknownDeficiency(String),
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type SimulationResult<T> = Result<T, SimulationError>;
