#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Input is shorter than the fixed file header.
    #[error("file too small: {actual} bytes, minimum is {minimum}")]
    FileTooSmall { actual: usize, minimum: usize },
    #[error("Not enough bytes")]
    NotEnoughData { actual: usize, minimum: usize },
    /// Bytes do not form a plausible calendar timestamp.
    #[error("invalid timestamp")]
    InvalidTimestamp,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
