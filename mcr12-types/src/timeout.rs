//! Scan timeout argument

use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::value::Value;

/// Validated scan timeout in milliseconds
///
/// `0` means the device scans until a code is read or it is told to stop.
/// Any other value bounds the scan on the device and the host-side read alike.
///
/// # Examples
///
/// ```
/// use mcr12_types::{ScanTimeout, Value};
///
/// let timeout = ScanTimeout::try_from(Value::from(1500)).unwrap();
/// assert_eq!(timeout.as_millis(), 1500);
/// assert!(ScanTimeout::try_from(Value::from(65536)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScanTimeout(u16);

impl ScanTimeout {
    /// Scan until a code is read
    pub const FOREVER: Self = Self(0);

    /// Largest timeout the device accepts
    pub const MAX: Self = Self(u16::MAX);

    pub const fn from_millis(ms: u16) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u16 {
        self.0
    }

    pub const fn is_forever(self) -> bool {
        self.0 == 0
    }

    /// Host-side read timeout matching this scan timeout (`None` = block)
    pub fn read_timeout(self) -> Option<Duration> {
        if self.is_forever() {
            None
        } else {
            Some(Duration::from_millis(u64::from(self.0)))
        }
    }

    /// Little-endian wire encoding: low byte first, then high byte
    pub const fn to_wire(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    fn out_of_range() -> Error {
        Error::OutOfRange("timeout must be between 0 and 65535 milliseconds".into())
    }
}

impl From<u16> for ScanTimeout {
    fn from(ms: u16) -> Self {
        Self(ms)
    }
}

impl TryFrom<i64> for ScanTimeout {
    type Error = Error;

    fn try_from(ms: i64) -> Result<Self> {
        u16::try_from(ms).map(Self).map_err(|_| Self::out_of_range())
    }
}

impl TryFrom<Value> for ScanTimeout {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Int(ms) => Self::try_from(ms),
            other => Err(Error::TypeMismatch {
                what: "timeout",
                expected: "an integer",
                found: other.kind(),
            }),
        }
    }
}

impl fmt::Display for ScanTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_forever() {
            write!(f, "forever")
        } else {
            write!(f, "{}ms", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_timeout_bounds() {
        assert_eq!(ScanTimeout::try_from(Value::from(0)), Ok(ScanTimeout::FOREVER));
        assert_eq!(ScanTimeout::try_from(Value::from(1)), Ok(ScanTimeout::from_millis(1)));
        assert_eq!(ScanTimeout::try_from(Value::from(65535)), Ok(ScanTimeout::MAX));
    }

    #[test]
    fn test_timeout_out_of_range() {
        for ms in [-1i64, 65536, i64::MIN, i64::MAX] {
            let result = ScanTimeout::try_from(Value::from(ms));
            assert!(matches!(result, Err(Error::OutOfRange(_))), "{} accepted", ms);
        }
    }

    #[test]
    fn test_timeout_type_mismatch() {
        for value in [Value::from(1.5), Value::from(2.0), Value::from("1"), Value::from(true)] {
            let result = ScanTimeout::try_from(value.clone());
            assert!(
                matches!(result, Err(Error::TypeMismatch { .. })),
                "{} accepted",
                value
            );
        }
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = ScanTimeout::try_from(Value::from(1.5)).unwrap_err();
        assert_eq!(err.to_string(), "timeout must be an integer, not 'float'");
    }

    #[test]
    fn test_wire_order_is_low_then_high() {
        assert_eq!(ScanTimeout::from_millis(0x1234).to_wire(), [0x34, 0x12]);
        assert_eq!(ScanTimeout::from_millis(1).to_wire(), [0x01, 0x00]);
        assert_eq!(ScanTimeout::MAX.to_wire(), [0xFF, 0xFF]);
    }

    #[test]
    fn test_read_timeout() {
        assert_eq!(ScanTimeout::FOREVER.read_timeout(), None);
        assert_eq!(
            ScanTimeout::from_millis(2500).read_timeout(),
            Some(Duration::from_millis(2500))
        );
    }
}
