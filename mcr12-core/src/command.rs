//! MCR12 command bodies

use bytes::{BufMut, Bytes, BytesMut};
use std::fmt;

use mcr12_types::{ConfigCode, ScanTimeout};

use crate::constants::{
    CONFIG_FLAG, NUL, SAVE_MAGIC,
    control::{SAVE_CONF, SCANNER_CTRL},
    family::{CMD, SET},
    scan_mode::{SCAN_FOREVER, SCAN_TIMEOUT, STOP_SCANNING},
};
use crate::error::{Error, Result};
use crate::frame::Frame;

/// Protocol commands
///
/// ```text
/// ScanForever   01 01 01
/// ScanTimeout   01 01 02 <lo> <hi>
/// Stop          01 01 00
/// SetConfig     02 <len+1> 82 <code bytes...>
/// SaveConfig    01 03 AA 55
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    ScanForever,
    /// Bounded scan; always encoded with the timeout mode, even for 0
    ScanTimeout(ScanTimeout),
    Stop,
    SetConfig(ConfigCode),
    SaveConfig,
}

impl Command {
    /// Scan command for a timeout, where 0 means scan forever
    ///
    /// # Examples
    ///
    /// ```
    /// use mcr12_core::Command;
    /// use mcr12_types::ScanTimeout;
    ///
    /// assert_eq!(Command::scan(ScanTimeout::FOREVER), Command::ScanForever);
    /// assert_eq!(Command::scan(ScanTimeout::from_millis(500)).encode().as_ref(), &[1, 1, 2, 0xF4, 1]);
    /// ```
    pub fn scan(timeout: ScanTimeout) -> Self {
        if timeout.is_forever() {
            Self::ScanForever
        } else {
            Self::ScanTimeout(timeout)
        }
    }

    /// Encode the command body (frame payload)
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(Frame::MAX_PAYLOAD_SIZE);

        match self {
            Self::ScanForever => buf.put_slice(&[CMD, SCANNER_CTRL, SCAN_FOREVER]),
            Self::ScanTimeout(timeout) => {
                buf.put_slice(&[CMD, SCANNER_CTRL, SCAN_TIMEOUT]);
                buf.put_slice(&timeout.to_wire());
            }
            Self::Stop => buf.put_slice(&[CMD, SCANNER_CTRL, STOP_SCANNING]),
            Self::SetConfig(code) => {
                // Length counts the flag byte as well as the code
                buf.put_u8(SET);
                buf.put_u8(code.len() as u8 + 1);
                buf.put_u8(CONFIG_FLAG);
                buf.put_slice(code.as_bytes());
            }
            Self::SaveConfig => {
                buf.put_slice(&[CMD, SAVE_CONF]);
                buf.put_slice(&SAVE_MAGIC);
            }
        }

        buf.freeze()
    }

    /// Build the frame carrying this command
    pub fn frame(&self) -> Result<Frame> {
        Frame::new(&self.encode())
    }

    /// Recognise an encoded command body
    ///
    /// Accepts bodies with or without the zero padding of a decoded frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCommand`] for bodies no command encodes to.
    pub fn parse(body: &[u8]) -> Result<Self> {
        let unknown = || Error::UnknownCommand(hex::encode(body));

        let command = match body {
            [CMD, SCANNER_CTRL, STOP_SCANNING, rest @ ..] if is_padding(rest) => Self::Stop,
            [CMD, SCANNER_CTRL, SCAN_FOREVER, rest @ ..] if is_padding(rest) => Self::ScanForever,
            [CMD, SCANNER_CTRL, SCAN_TIMEOUT, lo, hi, rest @ ..] if is_padding(rest) => {
                Self::ScanTimeout(ScanTimeout::from_millis(u16::from_le_bytes([*lo, *hi])))
            }
            [CMD, SAVE_CONF, a, b, rest @ ..] if [*a, *b] == SAVE_MAGIC && is_padding(rest) => {
                Self::SaveConfig
            }
            [SET, len, CONFIG_FLAG, rest @ ..] => {
                let code_len = usize::from(*len).checked_sub(1).ok_or_else(unknown)?;
                if code_len > rest.len() || !is_padding(&rest[code_len..]) {
                    return Err(unknown());
                }

                let code: String = rest[..code_len].iter().map(|&b| char::from(b)).collect();
                Self::SetConfig(ConfigCode::new(code)?)
            }
            _ => return Err(unknown()),
        };

        Ok(command)
    }

    /// Get command name
    pub fn name(&self) -> &'static str {
        match self {
            Self::ScanForever => "SCAN_FOREVER",
            Self::ScanTimeout(_) => "SCAN_TIMEOUT",
            Self::Stop => "STOP_SCANNING",
            Self::SetConfig(_) => "SET_CONFIG",
            Self::SaveConfig => "SAVE_CONFIG",
        }
    }
}

fn is_padding(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == NUL)
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScanTimeout(timeout) => write!(f, "{}({})", self.name(), timeout),
            Self::SetConfig(code) => write!(f, "{}({})", self.name(), code),
            _ => f.write_str(self.name()),
        }
    }
}
