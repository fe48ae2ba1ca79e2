//! Argument types for mcr12
//!
//! Loosely typed [`Value`]s as callers pass them, and the validated forms the
//! protocol layer encodes.

pub mod config_code;
pub mod error;
pub mod timeout;
pub mod value;

pub use config_code::ConfigCode;
pub use error::{Error, Result};
pub use timeout::ScanTimeout;
pub use value::Value;
