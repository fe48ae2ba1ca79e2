//! Run the protocol against the in-memory transport and dump the frames
//!
//! ```bash
//! RUST_LOG=trace cargo run --example offline
//! ```

use mcr12::{Command, Frame, MockTransport, Scanner};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let transport = MockTransport::new().with_line(&b"4006381333931\r\n"[..]);
    let mut scanner = Scanner::new(transport);

    scanner.configure("AB")?;
    println!("Scanned: {}", scanner.scan(2000)?);
    scanner.stop()?;

    for data in scanner.transport().written() {
        let frame = Frame::decode(&data)?;
        println!("{} {}", frame, Command::parse(&frame.payload)?);
    }

    Ok(())
}
