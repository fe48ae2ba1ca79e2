//! Argument validation errors

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Argument was of the wrong kind (e.g. a float where an integer is required)
    #[error("{what} must be {expected}, not '{found}'")]
    TypeMismatch {
        what: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// Argument was of the right kind but outside its bounds
    #[error("{0}")]
    OutOfRange(String),
}
