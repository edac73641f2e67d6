use thiserror::Error;

/// Represents errors that can occur during Sandflake operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SandflakeError {
    /// Error when an encoded string is not exactly the required length
    #[error("Encoded ID must be {expected} characters but was {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// Error when an encoded string contains a character outside the alphabet
    #[error("Invalid character '{0}' in encoded ID")]
    InvalidCharacter(char),
    /// Error when a constructor is given a field of the wrong byte length
    #[error("{field} must be {expected} bytes but was {actual}")]
    InvalidArgument {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}
