use thiserror::Error;

/// Rejections produced while turning user text or generator bounds into a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("no numbers to sort")]
    Empty,
    #[error("invalid number '{token}', please enter only whole numbers")]
    InvalidNumber { token: String },
    #[error("maximum value must be at least 1, got {max}")]
    InvalidBound { max: i32 },
}

/// A clock read that could not produce a usable reading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("clock unavailable: {0}")]
    Unavailable(String),
    #[error("clock went backwards between readings")]
    WentBackwards,
}
