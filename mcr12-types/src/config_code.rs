//! Configuration code argument

use std::fmt;

use crate::error::{Error, Result};
use crate::value::Value;

/// Validated configuration code
///
/// 1 to 10 characters, each sent to the device as a single byte holding the
/// character's code point. Characters above U+00FF have no single-byte form
/// and are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigCode {
    code: String,
    bytes: Vec<u8>,
}

impl ConfigCode {
    /// Minimum code length in characters
    pub const MIN_LEN: usize = 1;

    /// Maximum code length in characters
    pub const MAX_LEN: usize = 10;

    /// Validate a configuration code
    ///
    /// # Examples
    ///
    /// ```
    /// use mcr12_types::ConfigCode;
    ///
    /// let code = ConfigCode::new("AB").unwrap();
    /// assert_eq!(code.as_bytes(), b"AB");
    /// assert!(ConfigCode::new("").is_err());
    /// ```
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();

        let len = code.chars().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(Error::OutOfRange(
                "length of the configuration code must be between 1 and 10 characters".into(),
            ));
        }

        let bytes = code
            .chars()
            .map(|c| {
                u8::try_from(u32::from(c)).map_err(|_| {
                    Error::OutOfRange(format!(
                        "configuration code character {:?} (U+{:04X}) does not fit in one byte",
                        c,
                        u32::from(c)
                    ))
                })
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(Self { code, bytes })
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// One byte per character
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in characters (equal to the byte length)
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Never true for a validated code
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl TryFrom<Value> for ConfigCode {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Text(code) => Self::new(code),
            other => Err(Error::TypeMismatch {
                what: "configuration code",
                expected: "a string",
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<&str> for ConfigCode {
    type Error = Error;

    fn try_from(code: &str) -> Result<Self> {
        Self::new(code)
    }
}

impl fmt::Display for ConfigCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
