//! Scanner shared between threads
//!
//! The protocol has no request IDs, so two operations interleaved on one
//! port would garble each other's frames and responses. `SharedScanner`
//! holds the lock for a whole operation, including the blocking read of a
//! scan.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use mcr12_transport::{SerialTransport, Transport};
use mcr12_types::{ConfigCode, ScanTimeout, Value};

use crate::error::Result;
use crate::scanner::Scanner;

/// Thread-safe handle to a [`Scanner`]
///
/// Cheap to clone (Arc internally). Operations from different handles run
/// one after another, never interleaved.
pub struct SharedScanner<T: Transport = SerialTransport> {
    inner: Arc<Mutex<Scanner<T>>>,
}

impl<T: Transport> SharedScanner<T> {
    pub fn new(scanner: Scanner<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scanner)),
        }
    }

    /// Lock the scanner for a sequence of operations
    pub fn lock(&self) -> MutexGuard<'_, Scanner<T>> {
        self.inner.lock()
    }

    /// See [`Scanner::scan`]
    pub fn scan(&self, timeout_ms: impl Into<Value>) -> Result<String> {
        self.inner.lock().scan(timeout_ms)
    }

    /// See [`Scanner::scan_for`]
    pub fn scan_for(&self, timeout: ScanTimeout) -> Result<String> {
        self.inner.lock().scan_for(timeout)
    }

    /// See [`Scanner::stop`]
    pub fn stop(&self) -> Result<()> {
        self.inner.lock().stop()
    }

    /// See [`Scanner::configure`]
    pub fn configure(&self, code: impl Into<Value>) -> Result<()> {
        self.inner.lock().configure(code)
    }

    /// See [`Scanner::configure_code`]
    pub fn configure_code(&self, code: &ConfigCode) -> Result<()> {
        self.inner.lock().configure_code(code)
    }

    /// See [`Scanner::close`]; closes the scanner for every handle
    pub fn close(&self) -> Result<()> {
        self.inner.lock().close()
    }
}

impl<T: Transport> Clone for SharedScanner<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport> From<Scanner<T>> for SharedScanner<T> {
    fn from(scanner: Scanner<T>) -> Self {
        Self::new(scanner)
    }
}
