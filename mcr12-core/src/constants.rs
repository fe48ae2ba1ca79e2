//! Protocol constants

/// Start-of-frame marker
pub const STX: u8 = 0x02;

/// End-of-frame marker
pub const ETX: u8 = 0x03;

/// Padding byte for unused payload positions
pub const NUL: u8 = 0x00;

/// Total frame size on the wire
pub const FRAME_SIZE: usize = 16;

/// Payload bytes carried by every frame (zero-padded)
pub const MAX_PAYLOAD_SIZE: usize = 13;

/// Line terminator ending a scan response
pub const LINE_TERMINATOR: u8 = b'\n';

/// Command family bytes (first payload byte)
pub mod family {
    /// Control command (scanner control, save configuration)
    pub const CMD: u8 = 0x01;

    /// Set-configuration command
    pub const SET: u8 = 0x02;
}

/// Control command selectors (second payload byte after [`family::CMD`])
pub mod control {
    /// Scanner control
    pub const SCANNER_CTRL: u8 = 0x01;

    /// Persist the current configuration
    pub const SAVE_CONF: u8 = 0x03;
}

/// Scanner control modes (third payload byte after `SCANNER_CTRL`)
pub mod scan_mode {
    pub const STOP_SCANNING: u8 = 0x00;
    pub const SCAN_FOREVER: u8 = 0x01;
    pub const SCAN_TIMEOUT: u8 = 0x02;
}

/// Set-configuration flag following the length byte
pub const CONFIG_FLAG: u8 = 0x82;

/// Fixed argument of the save-configuration command
pub const SAVE_MAGIC: [u8; 2] = [0xAA, 0x55];
