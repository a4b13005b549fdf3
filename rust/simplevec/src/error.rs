use thiserror::Error;

/// Errors reported by the checked `SimpleVector` accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("index {index} is out of range for vector of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

impl Error {
    pub fn index_out_of_range(index: usize, size: usize) -> Error {
        Error::IndexOutOfRange { index, size }
    }
}
