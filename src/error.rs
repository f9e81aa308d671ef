use std::fmt;

/// Errors raised by operations with preconditions on their arguments.
///
/// Floating-point edge cases (overflow, division by zero, domain errors)
/// are never reported here; they are encoded as NaN or infinite values.
#[derive(Debug, Clone, PartialEq)]
pub enum ComplexError {
    NullArgument,
    InvalidArgument(String),
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComplexError::NullArgument => write!(f, "Required complex argument is absent"),
            ComplexError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for ComplexError {}

pub type Result<T> = std::result::Result<T, ComplexError>;
