//! MCR12 protocol frame structure and encoding/decoding

use bytes::{BufMut, Bytes, BytesMut};
use std::fmt;

use crate::{
    checksum,
    constants::{ETX, FRAME_SIZE, MAX_PAYLOAD_SIZE, NUL, STX},
    error::{Error, Result},
};

/// MCR12 protocol frame
///
/// # Frame Structure
///
/// ```text
/// ┌───────┬──────────────────────────────┬───────┬────────────┐
/// │  STX  │           Payload            │  ETX  │  Checksum  │
/// │ 0x02  │ 13 bytes (zero-padded right) │ 0x03  │   1 byte   │
/// └───────┴──────────────────────────────┴───────┴────────────┘
/// ```
///
/// Every frame is exactly 16 bytes regardless of the payload length.
///
/// # Examples
///
/// ```
/// use mcr12_core::Frame;
///
/// let frame = Frame::new(&[0x01, 0x01, 0x00]).unwrap();
/// let encoded = frame.encode();
/// assert_eq!(encoded.len(), 16);
///
/// let decoded = Frame::decode(&encoded).unwrap();
/// assert_eq!(&decoded.payload[..3], &[0x01, 0x01, 0x00]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    /// Command body, without padding for built frames and with the full
    /// 13 padded bytes for decoded ones
    pub payload: Bytes,
}

impl Frame {
    /// Frame size in bytes
    pub const SIZE: usize = FRAME_SIZE;

    /// Maximum payload size
    pub const MAX_PAYLOAD_SIZE: usize = MAX_PAYLOAD_SIZE;

    /// Create a frame around a command body
    ///
    /// # Errors
    ///
    /// Returns [`Error::PayloadTooLarge`] if the body exceeds 13 bytes.
    /// Callers validate their arguments first, so this only signals a bug
    /// in the encoder.
    pub fn new(payload: &[u8]) -> Result<Self> {
        if payload.len() > Self::MAX_PAYLOAD_SIZE {
            return Err(Error::PayloadTooLarge {
                size: payload.len(),
                max: Self::MAX_PAYLOAD_SIZE,
            });
        }

        Ok(Self {
            payload: Bytes::copy_from_slice(payload),
        })
    }

    /// Calculate checksum for this frame
    pub fn checksum(&self) -> u8 {
        checksum::calculate(&self.payload)
    }

    /// Encode frame to bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use mcr12_core::Frame;
    ///
    /// let frame = Frame::new(&[0x01, 0x03, 0xAA, 0x55]).unwrap();
    /// let bytes = frame.encode();
    /// assert_eq!(bytes[0], 0x02);
    /// assert_eq!(bytes[14], 0x03);
    /// ```
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(Self::SIZE);

        buf.put_u8(STX);
        buf.put_slice(&self.payload);
        buf.put_bytes(NUL, Self::MAX_PAYLOAD_SIZE - self.payload.len());
        buf.put_u8(ETX);
        buf.put_u8(self.checksum());

        debug_assert_eq!(buf.len(), Self::SIZE);

        buf.freeze()
    }

    /// Decode frame from bytes
    ///
    /// The returned payload holds all 13 payload bytes: trailing zeros of a
    /// command body cannot be told apart from padding.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Buffer is not exactly 16 bytes
    /// - STX or ETX is missing
    /// - Checksum verification fails
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() != Self::SIZE {
            return Err(Error::FrameLength {
                expected: Self::SIZE,
                actual: buf.len(),
            });
        }

        if buf[0] != STX {
            return Err(Error::InvalidMarker {
                name: "STX",
                offset: 0,
                found: buf[0],
            });
        }

        let etx_offset = 1 + Self::MAX_PAYLOAD_SIZE;
        if buf[etx_offset] != ETX {
            return Err(Error::InvalidMarker {
                name: "ETX",
                offset: etx_offset,
                found: buf[etx_offset],
            });
        }

        let frame = Self {
            payload: Bytes::copy_from_slice(&buf[1..etx_offset]),
        };

        let checksum_received = buf[Self::SIZE - 1];
        let checksum_calculated = frame.checksum();
        if checksum_calculated != checksum_received {
            return Err(Error::ChecksumMismatch {
                expected: checksum_calculated,
                received: checksum_received,
            });
        }

        Ok(frame)
    }

    /// Get total frame size
    pub fn size(&self) -> usize {
        Self::SIZE
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("payload", &hex::encode(&self.payload))
            .field("checksum", &format!("0x{:02X}", self.checksum()))
            .finish()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame[{}]", hex::encode(self.encode()))
    }
}
