//! High-level scanner interface

use tracing::{debug, info, trace, warn};

use mcr12_core::constants::LINE_TERMINATOR;
use mcr12_core::Command;
use mcr12_transport::{SerialTransport, Transport, serial::DEFAULT_BAUD_RATE};
use mcr12_types::{ConfigCode, ScanTimeout, Value};

use crate::error::{Error, Result};

/// MCR12 barcode scanner
///
/// Owns its transport; every operation runs to completion on the calling
/// thread. Wrap it in a [`SharedScanner`](crate::SharedScanner) to use one
/// scanner from several threads.
///
/// # Examples
///
/// ```no_run
/// use mcr12::Scanner;
///
/// fn main() -> mcr12::Result<()> {
///     let mut scanner = Scanner::open("/dev/ttyUSB0")?;
///
///     // Wait up to 5 seconds for a barcode
///     let code = scanner.scan(5000)?;
///     println!("Scanned: {}", code);
///
///     scanner.close()
/// }
/// ```
pub struct Scanner<T: Transport = SerialTransport> {
    transport: T,
}

impl Scanner<SerialTransport> {
    /// Open a scanner on a serial device at the default 9600 baud
    pub fn open(path: impl Into<String>) -> Result<Self> {
        Self::open_with_baud_rate(path, DEFAULT_BAUD_RATE)
    }

    /// Open a scanner on a serial device
    pub fn open_with_baud_rate(path: impl Into<String>, baud_rate: u32) -> Result<Self> {
        let mut transport = SerialTransport::new(path, baud_rate);
        transport.open()?;
        Ok(Self::new(transport))
    }
}

impl<T: Transport> Scanner<T> {
    /// Create a scanner over an already opened transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Scan a barcode
    ///
    /// `timeout_ms` is in milliseconds, 0 to wait indefinitely. Anything but
    /// an integer in `0..=65535` is rejected before the device is touched.
    ///
    /// The transport's read timeout is left at the scan timeout afterwards.
    ///
    /// # Errors
    ///
    /// - [`Error::TypeMismatch`] if `timeout_ms` is not an integer
    /// - [`Error::OutOfRange`] if it is outside `0..=65535`
    /// - [`Error::Timeout`] if no data arrived in time
    /// - [`Error::InvalidResponse`] if the data is not UTF-8
    pub fn scan(&mut self, timeout_ms: impl Into<Value>) -> Result<String> {
        let value: Value = timeout_ms.into();
        let timeout = ScanTimeout::try_from(value)?;
        self.scan_for(timeout)
    }

    /// Scan a barcode with an already validated timeout
    pub fn scan_for(&mut self, timeout: ScanTimeout) -> Result<String> {
        let command = Command::scan(timeout);

        debug!("Scanning (timeout: {})...", timeout);

        self.transport.set_read_timeout(timeout.read_timeout())?;
        self.send_command(&command)?;

        let line = self.transport.read_line(LINE_TERMINATOR)?;

        if line.is_empty() {
            warn!("Scan timed out ({})", timeout);
            return Err(Error::Timeout { timeout });
        }

        let text = String::from_utf8(line.to_vec())
            .map_err(|e| Error::InvalidResponse(format!("scan data is not UTF-8: {}", e)))?;
        let code = text.trim().to_string();

        debug!("Scanned {:?}", code);

        Ok(code)
    }

    /// Stop an ongoing scan
    pub fn stop(&mut self) -> Result<()> {
        debug!("Stopping scan");
        self.send_command(&Command::Stop)
    }

    /// Apply a configuration code and save it on the device
    ///
    /// Sends the set-configuration frame, then the save-configuration frame.
    /// If the second write fails the first has already reached the device.
    ///
    /// # Errors
    ///
    /// - [`Error::TypeMismatch`] if `code` is not text
    /// - [`Error::OutOfRange`] if it is not 1 to 10 single-byte characters
    pub fn configure(&mut self, code: impl Into<Value>) -> Result<()> {
        let value: Value = code.into();
        let code = ConfigCode::try_from(value)?;
        self.configure_code(&code)
    }

    /// Apply an already validated configuration code and save it
    pub fn configure_code(&mut self, code: &ConfigCode) -> Result<()> {
        debug!("Configuring {:?}", code.as_str());

        self.send_command(&Command::SetConfig(code.clone()))?;
        self.send_command(&Command::SaveConfig)
    }

    /// Close the transport
    ///
    /// Further operations fail with a transport error.
    pub fn close(&mut self) -> Result<()> {
        info!("Closing {}", self.transport.port_name());
        self.transport.close()?;
        Ok(())
    }

    // Helper methods

    fn send_command(&mut self, command: &Command) -> Result<()> {
        let frame = command.frame()?;

        trace!("Sending {}: {:?}", command, frame);

        self.transport.flush_input()?;
        self.transport.flush_output()?;
        self.transport.write(&frame.encode())?;
        self.transport.flush()?;

        Ok(())
    }
}
