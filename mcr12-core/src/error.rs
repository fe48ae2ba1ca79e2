//! Error types for mcr12-core

/// Result type alias for mcr12-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core protocol errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Command body does not fit in a frame
    #[error("Payload too large: {size} bytes (max: {max} bytes)")]
    PayloadTooLarge {
        size: usize,
        max: usize,
    },

    /// Frame is not exactly 16 bytes
    #[error("Invalid frame length: expected {expected} bytes, got {actual} bytes")]
    FrameLength {
        expected: usize,
        actual: usize,
    },

    /// STX or ETX marker missing
    #[error("Invalid {name} marker at offset {offset}: 0x{found:02X}")]
    InvalidMarker {
        name: &'static str,
        offset: usize,
        found: u8,
    },

    /// Checksum verification failed
    #[error("Checksum mismatch: expected 0x{expected:02X}, received 0x{received:02X}")]
    ChecksumMismatch {
        expected: u8,
        received: u8,
    },

    /// Command body not recognised
    #[error("Unknown command body: {0}")]
    UnknownCommand(String),

    /// Argument validation failed
    #[error(transparent)]
    Invalid(#[from] mcr12_types::Error),
}
