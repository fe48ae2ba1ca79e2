//! Scan one barcode
//!
//! ```bash
//! MCR12_PORT=/dev/ttyUSB0 cargo run --example scan -- 5000
//! ```

use mcr12::Scanner;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Change to your scanner's port
    let port = std::env::var("MCR12_PORT").unwrap_or_else(|_| "/dev/ttyUSB0".to_string());

    // Timeout in milliseconds, 0 waits forever
    let timeout: i64 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(5000);

    println!("Opening {}...", port);
    let mut scanner = Scanner::open(port)?;

    match scanner.scan(timeout) {
        Ok(code) => println!("✓ Scanned: {}", code),
        Err(mcr12::Error::Timeout { .. }) => {
            println!("✗ Nothing scanned");
            scanner.stop()?;
        }
        Err(e) => return Err(e.into()),
    }

    scanner.close()?;

    Ok(())
}
