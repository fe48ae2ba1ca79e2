//! Transport layer for the MCR12 protocol
//!
//! The protocol only needs a byte stream it can write frames to, flush, and
//! read newline-terminated responses from within a read timeout.

pub mod error;
pub mod mock;
pub mod serial;

pub use error::{Error, Result};
pub use mock::{Call, MockTransport};
pub use serial::SerialTransport;

use std::time::Duration;

use bytes::BytesMut;

/// Byte-stream transport to a scanner
///
/// Every method blocks the calling thread. Implementations are used by one
/// caller at a time; callers that share a transport serialise access
/// themselves.
pub trait Transport: Send {
    /// Write all bytes
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Wait until written bytes are transmitted
    fn flush(&mut self) -> Result<()>;

    /// Discard received bytes not yet read
    fn flush_input(&mut self) -> Result<()>;

    /// Discard written bytes not yet transmitted
    fn flush_output(&mut self) -> Result<()>;

    /// Read up to and including `terminator`
    ///
    /// Blocks for at most the read timeout and returns whatever arrived by
    /// then, which is empty if nothing did.
    fn read_line(&mut self, terminator: u8) -> Result<BytesMut>;

    /// Current read timeout (`None` blocks until the terminator arrives)
    fn read_timeout(&self) -> Option<Duration>;

    /// Set the read timeout used by subsequent reads
    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> Result<()>;

    /// Release the underlying device; later calls fail until reopened
    fn close(&mut self) -> Result<()>;

    /// Port name for logs
    fn port_name(&self) -> String;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        (**self).write(data)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn flush_input(&mut self) -> Result<()> {
        (**self).flush_input()
    }

    fn flush_output(&mut self) -> Result<()> {
        (**self).flush_output()
    }

    fn read_line(&mut self, terminator: u8) -> Result<BytesMut> {
        (**self).read_line(terminator)
    }

    fn read_timeout(&self) -> Option<Duration> {
        (**self).read_timeout()
    }

    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> Result<()> {
        (**self).set_read_timeout(timeout)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn port_name(&self) -> String {
        (**self).port_name()
    }
}
