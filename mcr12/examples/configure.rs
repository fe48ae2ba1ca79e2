//! Apply and save a configuration code
//!
//! ```bash
//! MCR12_PORT=/dev/ttyUSB0 cargo run --example configure -- AB
//! ```

use anyhow::Context;
use mcr12::Scanner;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("MCR12_PORT").unwrap_or_else(|_| "/dev/ttyUSB0".to_string());
    let code = std::env::args()
        .nth(1)
        .context("usage: configure <code>")?;

    let mut scanner = Scanner::open_with_baud_rate(&port, 9600)?;

    scanner
        .configure(code.as_str())
        .with_context(|| format!("configuring {} with {:?}", port, code))?;
    println!("✓ Configuration {} saved", code);

    scanner.close()?;

    Ok(())
}
