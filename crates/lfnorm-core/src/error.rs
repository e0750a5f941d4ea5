use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Stream capabilities the normalizer refuses to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Mark,
    Reset,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Mark => f.write_str("mark"),
            Capability::Reset => f.write_str("reset"),
        }
    }
}

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported capability: {0} is not supported by line-ending normalization")]
    UnsupportedCapability(Capability),

    #[error("not normalized at byte {offset}: {reason}")]
    NotNormalized { offset: usize, reason: &'static str },
}

impl From<NormalizeError> for std::io::Error {
    fn from(e: NormalizeError) -> Self {
        match e {
            NormalizeError::Io(e) => e,
            NormalizeError::UnsupportedCapability(_) => {
                std::io::Error::new(std::io::ErrorKind::Unsupported, e)
            }
            NormalizeError::NotNormalized { .. } => {
                std::io::Error::new(std::io::ErrorKind::InvalidData, e)
            }
        }
    }
}
