//! Scripted in-memory transport
//!
//! Records every call made through [`Transport`] and answers `read_line`
//! from a queue of scripted lines, so protocol code can be exercised without
//! a scanner attached. An exhausted queue behaves like a read timeout.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::{Transport, error::*};

/// One recorded transport call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Write(Bytes),
    Flush,
    FlushInput,
    FlushOutput,
    ReadLine(u8),
    SetReadTimeout(Option<Duration>),
    Close,
}

/// In-memory [`Transport`] for tests and demos
#[derive(Debug, Default)]
pub struct MockTransport {
    calls: Vec<Call>,
    lines: VecDeque<Bytes>,
    read_timeout: Option<Duration>,
    writes: usize,
    fail_write: Option<usize>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a line for the next `read_line`
    pub fn with_line(mut self, line: impl Into<Bytes>) -> Self {
        self.push_line(line);
        self
    }

    /// Fail the `n`-th write (1-based) with a broken pipe
    pub fn with_failing_write(mut self, n: usize) -> Self {
        self.fail_write = Some(n);
        self
    }

    /// Queue a line for a later `read_line`
    pub fn push_line(&mut self, line: impl Into<Bytes>) {
        self.lines.push_back(line.into());
    }

    /// Every call so far, in order
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Bytes of every successful write, in order
    pub fn written(&self) -> Vec<Bytes> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Write(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    /// Forget recorded calls (scripted lines are kept)
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.writes += 1;
        if self.fail_write == Some(self.writes) {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "scripted write failure",
            )));
        }

        trace!("Mock write: {}", hex::encode(data));
        self.calls.push(Call::Write(Bytes::copy_from_slice(data)));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.calls.push(Call::Flush);
        Ok(())
    }

    fn flush_input(&mut self) -> Result<()> {
        self.calls.push(Call::FlushInput);
        Ok(())
    }

    fn flush_output(&mut self) -> Result<()> {
        self.calls.push(Call::FlushOutput);
        Ok(())
    }

    fn read_line(&mut self, terminator: u8) -> Result<BytesMut> {
        self.calls.push(Call::ReadLine(terminator));

        let line = self.lines.pop_front().unwrap_or_default();
        Ok(BytesMut::from(line.as_ref()))
    }

    fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }

    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> Result<()> {
        self.calls.push(Call::SetReadTimeout(timeout));
        self.read_timeout = timeout;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.calls.push(Call::Close);
        Ok(())
    }

    fn port_name(&self) -> String {
        "mock".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mock_records_calls_in_order() {
        let mut transport = MockTransport::new();

        transport.flush_input().unwrap();
        transport.write(&[0x02, 0x03]).unwrap();
        transport.flush().unwrap();

        assert_eq!(
            transport.calls(),
            &[
                Call::FlushInput,
                Call::Write(Bytes::from_static(&[0x02, 0x03])),
                Call::Flush,
            ]
        );
    }

    #[test]
    fn test_mock_replays_lines_then_times_out() {
        let mut transport = MockTransport::new().with_line(&b"A123\r\n"[..]);

        assert_eq!(transport.read_line(b'\n').unwrap().as_ref(), b"A123\r\n");
        assert!(transport.read_line(b'\n').unwrap().is_empty());
    }

    #[test]
    fn test_mock_failing_write() {
        let mut transport = MockTransport::new().with_failing_write(2);

        transport.write(&[0x01]).unwrap();
        assert!(matches!(transport.write(&[0x02]), Err(Error::Io(_))));
        transport.write(&[0x03]).unwrap();

        assert_eq!(
            transport.written(),
            vec![Bytes::from_static(&[0x01]), Bytes::from_static(&[0x03])]
        );
    }

    #[test]
    fn test_mock_read_timeout() {
        let mut transport = MockTransport::new();
        assert_eq!(transport.read_timeout(), None);

        transport.set_read_timeout(Some(Duration::from_millis(10))).unwrap();
        assert_eq!(transport.read_timeout(), Some(Duration::from_millis(10)));
    }
}
