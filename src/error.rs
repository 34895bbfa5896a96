use std::string::FromUtf8Error;
use thiserror::Error;

/// Boxed cause carried by the store-facing variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum KvsError {
    /// The store could not be reached: refused, timed out, dropped or unresolvable.
    #[error("store at {addr} is unavailable: {source}")]
    StoreUnavailable {
        addr: String,
        #[source]
        source: BoxError,
    },
    /// The store answered, but with an error reply.
    #[error("store rejected the request: {source}")]
    Rejected {
        #[source]
        source: BoxError,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("value stored under {key:?} is not valid UTF-8")]
    Decode {
        key: String,
        #[source]
        source: FromUtf8Error,
    },
    #[error("health probe {key:?} read back an unexpected value")]
    ProbeMismatch { key: String },
}

impl KvsError {
    /// Whether this error means the store itself could not be reached.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, KvsError::StoreUnavailable { .. })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, KvsError::InvalidInput(_))
    }
}

/// Result of library operations against a store.
pub type KvsResult<T> = std::result::Result<T, KvsError>;

pub type Result<T> = std::result::Result<T, anyhow::Error>;
