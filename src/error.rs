use thiserror::Error;

/// Failures surfaced by the codec and its file layer.
#[derive(Error, Debug)]
pub enum HuffmanError {
    /// Nothing to compress
    #[error("cannot compress empty data")]
    EmptyInput,

    /// The input does not fit in the 32-bit frequency counts of the container
    #[error("input of {0} bytes is too large for the container format")]
    InputTooLarge(usize),

    /// Malformed container or bitstream
    #[error("corrupt data: {0}")]
    CorruptData(String),

    /// Malformed statistics sidecar
    #[error("invalid properties: {0}")]
    InvalidProperties(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HuffmanError {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        HuffmanError::CorruptData(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
