use thiserror::Error;

/// Everything that can go wrong in this crate.
///
/// `InvalidConfiguration` is fatal to construction: no partially initialized
/// value is ever produced. `OutOfBounds` is recoverable: the caller skips the
/// request and the simulation keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("cell ({x}, {y}) is outside the {width}x{height} field")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl Error {
    pub(crate) fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
