//! # mcr12
//!
//! Rust driver for MCR12 serial barcode scanners.
//!
//! ## Features
//!
//! - Fixed 16-byte framed command protocol with checksums
//! - Scan (bounded or unbounded), stop, and persistent configuration
//! - Arguments validated before anything is sent to the device
//! - Pluggable byte-stream transport (serial port or in-memory mock)
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcr12::Scanner;
//!
//! fn main() -> mcr12::Result<()> {
//!     let mut scanner = Scanner::open("/dev/ttyUSB0")?;
//!
//!     // Apply and save a configuration code
//!     scanner.configure("AB")?;
//!
//!     // Scan with a 3 second timeout
//!     match scanner.scan(3000) {
//!         Ok(code) => println!("{}", code),
//!         Err(mcr12::Error::Timeout { .. }) => println!("nothing scanned"),
//!         Err(e) => return Err(e),
//!     }
//!
//!     scanner.stop()?;
//!     scanner.close()
//! }
//! ```

pub mod error;
pub mod scanner;
pub mod shared;

// Re-exports
pub use error::{Error, Result};
pub use scanner::Scanner;
pub use shared::SharedScanner;

// Re-export types
pub use mcr12_core::{Command, Frame};
pub use mcr12_transport::{MockTransport, SerialTransport, Transport};
pub use mcr12_types::{ConfigCode, ScanTimeout, Value};
