//! Serial port transport
//!
//! MCR12 scanners talk 8N1 without flow control, 9600 baud unless
//! reconfigured.

use std::io::{self, Read, Write};
use std::time::{Duration, Instant};

use bytes::{BufMut, BytesMut};
use serialport::{ClearBuffer, DataBits, FlowControl, Parity, SerialPort, StopBits};
use tracing::{debug, info, trace, warn};

use crate::{Transport, error::*};

/// Default baud rate
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Port timeout used while waiting with no read timeout; reads retry after it
const BLOCKING_POLL: Duration = Duration::from_secs(60);

/// Serial transport for MCR12 scanners
pub struct SerialTransport {
    path: String,
    baud_rate: u32,
    read_timeout: Option<Duration>,
    port: Option<Box<dyn SerialPort>>,
}

impl SerialTransport {
    /// Create new serial transport (not yet opened)
    pub fn new(path: impl Into<String>, baud_rate: u32) -> Self {
        Self {
            path: path.into(),
            baud_rate,
            read_timeout: None,
            port: None,
        }
    }

    /// Wrap a port opened elsewhere
    pub fn from_port(port: Box<dyn SerialPort>) -> Self {
        let path = port.name().unwrap_or_default();
        let baud_rate = port.baud_rate().unwrap_or(DEFAULT_BAUD_RATE);

        Self {
            path,
            baud_rate,
            read_timeout: None,
            port: Some(port),
        }
    }

    /// Set baud rate
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Set initial read timeout (`None` blocks)
    pub fn with_read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn baud_rate(&self) -> u32 {
        self.baud_rate
    }

    /// Open the device, 8 data bits, no parity, one stop bit
    pub fn open(&mut self) -> Result<()> {
        if self.is_open() {
            return Err(Error::AlreadyConnected);
        }

        debug!("Opening {} at {} baud...", self.path, self.baud_rate);

        let port = serialport::new(&self.path, self.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(self.read_timeout.unwrap_or(BLOCKING_POLL))
            .open()?;

        info!("Opened {} at {} baud", self.path, self.baud_rate);

        self.port = Some(port);
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.port.is_some()
    }

    fn port_mut(&mut self) -> Result<&mut Box<dyn SerialPort>> {
        self.port.as_mut().ok_or(Error::NotConnected)
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let port = self.port_mut()?;

        trace!("Sending {} bytes: {}", data.len(), hex::encode(data));

        port.write_all(data)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Write::flush(self.port_mut()?)?;
        Ok(())
    }

    fn flush_input(&mut self) -> Result<()> {
        self.port_mut()?.clear(ClearBuffer::Input)?;
        Ok(())
    }

    fn flush_output(&mut self) -> Result<()> {
        self.port_mut()?.clear(ClearBuffer::Output)?;
        Ok(())
    }

    fn read_line(&mut self, terminator: u8) -> Result<BytesMut> {
        // The read timeout bounds the whole line, not each byte
        let deadline = self.read_timeout.map(|timeout| Instant::now() + timeout);
        let port = self.port_mut()?;

        let mut line = BytesMut::with_capacity(64);
        let mut byte = [0u8; 1];

        loop {
            let wait = match deadline {
                Some(deadline) => {
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    if remaining.is_zero() {
                        break;
                    }
                    remaining
                }
                None => BLOCKING_POLL,
            };
            port.set_timeout(wait)?;

            match port.read(&mut byte) {
                Ok(0) => continue,
                Ok(_) => {
                    line.put_u8(byte[0]);
                    if byte[0] == terminator {
                        break;
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::TimedOut => continue,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!("Read error: {}", e);
                    return Err(Error::Io(e));
                }
            }
        }

        trace!("Received {} bytes: {}", line.len(), hex::encode(&line));

        Ok(line)
    }

    fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }

    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> Result<()> {
        self.read_timeout = timeout;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.port.take().is_some() {
            debug!("Closed {}", self.path);
        }
        Ok(())
    }

    fn port_name(&self) -> String {
        self.port
            .as_ref()
            .and_then(|port| port.name())
            .unwrap_or_else(|| self.path.clone())
    }
}

impl Drop for SerialTransport {
    fn drop(&mut self) {
        if self.is_open() {
            warn!("Serial transport {} dropped while still open", self.path);
        }
    }
}
