//! High-level error types

use mcr12_types::ScanTimeout;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Argument of the wrong kind; nothing was sent
    #[error("{what} must be {expected}, not '{found}'")]
    TypeMismatch {
        what: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// Argument outside its bounds; nothing was sent
    #[error("{0}")]
    OutOfRange(String),

    /// No scan data arrived within the timeout
    #[error("Scan timed out ({timeout})")]
    Timeout {
        timeout: ScanTimeout,
    },

    #[error("Invalid response from scanner: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Transport(#[from] mcr12_transport::Error),

    #[error("Core protocol error: {0}")]
    Core(mcr12_core::Error),
}

impl Error {
    /// Check if the error was raised before anything reached the device
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. } | Self::OutOfRange(_))
    }

    /// Check if error is recoverable (retry might succeed)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Transport(mcr12_transport::Error::Io(_)))
    }
}

impl From<mcr12_types::Error> for Error {
    fn from(err: mcr12_types::Error) -> Self {
        match err {
            mcr12_types::Error::TypeMismatch {
                what,
                expected,
                found,
            } => Self::TypeMismatch {
                what,
                expected,
                found,
            },
            mcr12_types::Error::OutOfRange(msg) => Self::OutOfRange(msg),
        }
    }
}

impl From<mcr12_core::Error> for Error {
    fn from(err: mcr12_core::Error) -> Self {
        match err {
            mcr12_core::Error::Invalid(err) => err.into(),
            other => Self::Core(other),
        }
    }
}
