//! # mcr12-core
//!
//! Core protocol implementation for MCR12 serial barcode scanners.
//!
//! This crate provides the low-level protocol primitives:
//! - Frame structure and encoding/decoding
//! - Checksum calculation
//! - Command bodies
//! - Protocol constants

pub mod checksum;
pub mod command;
pub mod constants;
pub mod error;
pub mod frame;

pub use command::Command;
pub use error::{Error, Result};
pub use frame::Frame;
