//! Error type shared by every dispatch strategy in the crate.

use thiserror::Error;

/// Failures raised while resolving a selector to a behavior.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A capability was invoked on a type that never overrode it.
    #[error("`{operation}` is not implemented for shape kind `{kind}`")]
    NotImplemented {
        kind: String,
        operation: &'static str,
    },

    /// Strategy table lookup miss.
    #[error("unknown key `{0}`")]
    UnknownKey(String),

    /// Branching price calculation hit a category it has no arm for.
    #[error("unknown product category `{0}`")]
    UnknownCategory(String),

    /// A `KEY=MULTIPLIER` override could not be parsed.
    #[error("invalid rate override `{0}` (expected KEY=MULTIPLIER)")]
    InvalidRate(String),

    /// Two variants of the same demo disagree.
    #[error("variant `{variant}` failed verification: {reason}")]
    Verification { variant: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_selector() {
        let err = DispatchError::UnknownKey("Toys".to_string());
        assert_eq!(err.to_string(), "unknown key `Toys`");

        let err = DispatchError::NotImplemented {
            kind: "Hexagon".to_string(),
            operation: "draw",
        };
        assert_eq!(
            err.to_string(),
            "`draw` is not implemented for shape kind `Hexagon`"
        );
    }

    #[test]
    fn test_io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: DispatchError = io.into();
        assert!(matches!(err, DispatchError::Io(_)));
    }
}
