use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NetError {
    #[error("Shape mismatch: expected {expected}, got {actual}.")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Network has no layers")]
    NoLayers,

    #[error("Invalid training configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, NetError>;

/// Fails with [`NetError::ShapeMismatch`] unless `actual == expected`.
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(NetError::ShapeMismatch { expected, actual });
    }
    Ok(())
}
