//! MCR12 frame checksum
//!
//! The checksum byte makes the low byte of the sum of STX, ETX, the payload
//! and the checksum itself equal to zero:
//!
//! ```text
//! checksum = 0x100 - ((STX + ETX + sum(payload)) & 0xFF)    (mod 0x100)
//! ```
//!
//! Padding bytes are zero, so summing the padded or unpadded payload gives
//! the same result.

use tracing::trace;

use crate::constants::{ETX, STX};

/// Calculate the checksum byte for a frame payload
///
/// `payload` is the command body only, without markers or padding.
///
/// # Examples
///
/// ```
/// use mcr12_core::checksum;
///
/// // Stop command
/// let checksum = checksum::calculate(&[0x01, 0x01, 0x00]);
/// assert_eq!(checksum, 0xF9);
/// ```
pub fn calculate(payload: &[u8]) -> u8 {
    let sum = payload
        .iter()
        .fold(u32::from(STX) + u32::from(ETX), |acc, &b| acc + u32::from(b));

    // 0x100 when the low byte is already zero, which truncates to 0x00
    let checksum = (0x100 - (sum & 0xFF)) as u8;

    trace!(
        payload = %hex::encode(payload),
        checksum = format!("0x{:02X}", checksum),
        "Calculated checksum"
    );

    checksum
}

/// Verify checksum
pub fn verify(payload: &[u8], expected: u8) -> bool {
    calculate(payload) == expected
}
