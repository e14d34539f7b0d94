//! Runtime error types for ARISE

use arise_spec::AriseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    SpecError(#[from] AriseError),

    #[error("Cannot decode word {index}: {source}")]
    Decode {
        index: usize,
        #[source]
        source: AriseError,
    },

    #[error("Step limit exceeded: {limit}")]
    StepLimitExceeded { limit: u64 },
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
