use thiserror::Error;

/// Misuse of a view that can only be detected at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EzyError {
    #[error("slice bounds are inverted: from ({from}) is greater than until ({until})")]
    InvertedSlice { from: usize, until: usize },

    #[error("step must be non-zero")]
    ZeroStep,

    #[error("chunk size must be non-zero")]
    ZeroChunkSize,
}

pub type EzyResult<T> = Result<T, EzyError>;
