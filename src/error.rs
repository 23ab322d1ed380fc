//! Error types and result alias for the generator.
//!
//! [`GenerationError`] covers rejected parameters, candidate sampling that ran
//! out of attempts, and failures while exporting a collection.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerationError>;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid generation parameters: {0}")]
    InvalidParameters(String),

    #[error(
        "could not place a non-wrapping polygon after {attempts} attempts; try a smaller max_size_km"
    )]
    SamplingExhausted { attempts: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl GenerationError {
    /// True when retrying with different parameters could succeed.
    pub fn is_exhaustion(&self) -> bool {
        matches!(self, GenerationError::SamplingExhausted { .. })
    }
}
