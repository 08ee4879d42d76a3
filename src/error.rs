use thiserror::Error;

pub type Result<T, E = FieldError> = core::result::Result<T, E>;

/// Errors raised at the conversion boundary of field elements. Arithmetic
/// itself never fails.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FieldError {
    #[error("invalid buffer size: expected {expected} bytes, got {found}")]
    InvalidLength { expected: usize, found: usize },

    #[error("can't parse {text:?} as an integer")]
    Parse { text: String },

    #[error("input of {len} characters exceeds the limit of {max}")]
    TooLong { len: usize, max: usize },

    /// The random source's own error, untouched.
    #[error("randomness source failed: {0}")]
    Randomness(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised while expanding a message into field elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum HashToCurveError {
    #[error("domain separation tag of {0} bytes is longer than 255 bytes")]
    DstTooLong(usize),

    #[error("cannot expand a message to {0} bytes")]
    OutputTooLong(usize),
}
