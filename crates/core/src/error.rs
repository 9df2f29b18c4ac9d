use thiserror::Error;

/// Errors produced by the transformation core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input could not be read as well-formed Unicode text, so it could
    /// not be normalized.
    #[error("Normalization failure: {0}")]
    NormalizationFailure(#[from] std::str::Utf8Error),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_failure_carries_cause() {
        let bytes = vec![0x66, 0x6f, 0xff];
        let cause = std::str::from_utf8(&bytes).unwrap_err();
        let err = Error::from(cause);

        assert!(err.to_string().starts_with("Normalization failure: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unknown_operation_message() {
        let err = Error::UnknownOperation("shout".to_string());
        assert_eq!(err.to_string(), "Unknown operation: shout");
    }
}
