//! End-to-end scanner operations against a scripted transport

use std::time::Duration;

use bytes::Bytes;
use pretty_assertions::assert_eq;

use mcr12::{Command, ConfigCode, Error, Frame, MockTransport, ScanTimeout, Scanner, Transport};
use mcr12_transport::Call;

/// Decode every written frame back into the command it carries
fn sent_commands(scanner: &Scanner<MockTransport>) -> Vec<Command> {
    scanner
        .transport()
        .written()
        .iter()
        .map(|data| {
            assert_eq!(data.len(), 16, "frames are always 16 bytes");
            let frame = Frame::decode(data).expect("valid frame");
            Command::parse(&frame.payload).expect("known command")
        })
        .collect()
}

fn framed(body: &[u8]) -> Bytes {
    Frame::new(body).unwrap().encode()
}

#[test]
fn configure_sends_set_then_save() {
    let mut scanner = Scanner::new(MockTransport::new());

    scanner.configure("AB").unwrap();

    assert_eq!(
        scanner.transport().written(),
        vec![
            framed(&[0x02, 0x03, 0x82, 65, 66]),
            framed(&[0x01, 0x03, 0xAA, 0x55]),
        ]
    );
    assert!(
        !scanner
            .transport()
            .calls()
            .iter()
            .any(|call| matches!(call, Call::ReadLine(_))),
        "configure never waits for a response"
    );
}

#[test]
fn configure_frames_are_flushed_separately() {
    let mut scanner = Scanner::new(MockTransport::new());

    scanner.configure("X").unwrap();

    let calls = scanner.transport().calls();
    assert_eq!(calls.len(), 8);
    for transmission in calls.chunks(4) {
        assert_eq!(transmission[0], Call::FlushInput);
        assert_eq!(transmission[1], Call::FlushOutput);
        assert!(matches!(transmission[2], Call::Write(_)));
        assert_eq!(transmission[3], Call::Flush);
    }
}

#[test]
fn configure_code_length_bounds() {
    let mut scanner = Scanner::new(MockTransport::new());

    scanner.configure("A").unwrap();
    scanner.configure("ABCDEFGHIJ").unwrap();

    assert!(matches!(scanner.configure(""), Err(Error::OutOfRange(_))));
    assert!(matches!(scanner.configure("ABCDEFGHIJK"), Err(Error::OutOfRange(_))));
    assert!(matches!(scanner.configure(7), Err(Error::TypeMismatch { .. })));

    // Only the two valid codes reached the transport
    assert_eq!(scanner.transport().written().len(), 4);
}

#[test]
fn configure_partial_failure_is_not_rolled_back() {
    let mut scanner = Scanner::new(MockTransport::new().with_failing_write(2));

    let result = scanner.configure("AB");

    assert!(matches!(result, Err(Error::Transport(_))));
    assert_eq!(
        sent_commands(&scanner),
        vec![Command::SetConfig(ConfigCode::new("AB").unwrap())]
    );
}

#[test]
fn scan_returns_trimmed_text() {
    let transport = MockTransport::new().with_line(&b"A123456\r\n"[..]);
    let mut scanner = Scanner::new(transport);

    assert_eq!(scanner.scan(1000).unwrap(), "A123456");
}

#[test]
fn scan_without_data_times_out() {
    let mut scanner = Scanner::new(MockTransport::new());

    let result = scanner.scan(250);

    assert!(matches!(
        result,
        Err(Error::Timeout { timeout }) if timeout == ScanTimeout::from_millis(250)
    ));
}

#[test]
fn scan_forever_encodes_forever_and_clears_timeout() {
    let transport = MockTransport::new().with_line(&b"CODE\n"[..]);
    let mut scanner = Scanner::new(transport);
    scanner
        .transport_mut()
        .set_read_timeout(Some(Duration::from_secs(1)))
        .unwrap();

    assert_eq!(scanner.scan(0).unwrap(), "CODE");

    assert_eq!(sent_commands(&scanner), vec![Command::ScanForever]);
    assert_eq!(scanner.transport().read_timeout(), None);
}

#[test]
fn scan_timeout_boundaries() {
    let transport = MockTransport::new()
        .with_line(&b"one\n"[..])
        .with_line(&b"max\n"[..]);
    let mut scanner = Scanner::new(transport);

    scanner.scan(1).unwrap();
    assert_eq!(
        scanner.transport().read_timeout(),
        Some(Duration::from_millis(1))
    );

    scanner.scan(65535).unwrap();
    assert_eq!(
        scanner.transport().read_timeout(),
        Some(Duration::from_millis(65535))
    );

    let written = scanner.transport().written();
    assert_eq!(&written[0][1..6], &[0x01, 0x01, 0x02, 0x01, 0x00]);
    assert_eq!(&written[1][1..6], &[0x01, 0x01, 0x02, 0xFF, 0xFF]);
}

#[test]
fn scan_rejects_invalid_timeouts_before_io() {
    let mut scanner = Scanner::new(MockTransport::new());

    assert!(matches!(scanner.scan(65536), Err(Error::OutOfRange(_))));
    assert!(matches!(scanner.scan(-1), Err(Error::OutOfRange(_))));
    assert!(matches!(scanner.scan(1.5), Err(Error::TypeMismatch { .. })));
    assert!(matches!(scanner.scan("1"), Err(Error::TypeMismatch { .. })));

    assert!(scanner.transport().calls().is_empty());
}

#[test]
fn scan_leaves_read_timeout_set() {
    let transport = MockTransport::new().with_line(&b"X\n"[..]);
    let mut scanner = Scanner::new(transport);

    scanner.scan(3000).unwrap();

    // A stop afterwards does not touch the read timeout
    scanner.stop().unwrap();
    assert_eq!(
        scanner.transport().read_timeout(),
        Some(Duration::from_millis(3000))
    );
}

#[test]
fn scan_rejects_non_utf8_data() {
    let transport = MockTransport::new().with_line(vec![0xFF, 0xFE, b'\n']);
    let mut scanner = Scanner::new(transport);

    assert!(matches!(scanner.scan(100), Err(Error::InvalidResponse(_))));
}

#[test]
fn stop_sends_single_frame() {
    let mut scanner = Scanner::new(MockTransport::new());

    scanner.stop().unwrap();

    assert_eq!(
        scanner.transport().written(),
        vec![framed(&[0x01, 0x01, 0x00])]
    );
}

#[test]
fn typed_entry_points() {
    let transport = MockTransport::new().with_line(&b"typed\n"[..]);
    let mut scanner = Scanner::new(transport);

    let code = ConfigCode::new("Z9").unwrap();
    scanner.configure_code(&code).unwrap();
    assert_eq!(scanner.scan_for(ScanTimeout::from_millis(500)).unwrap(), "typed");

    assert_eq!(
        sent_commands(&scanner),
        vec![
            Command::SetConfig(code),
            Command::SaveConfig,
            Command::ScanTimeout(ScanTimeout::from_millis(500)),
        ]
    );
}

#[test]
fn boxed_transport() {
    let transport: Box<dyn Transport> = Box::new(MockTransport::new().with_line(&b"boxed\n"[..]));
    let mut scanner = Scanner::new(transport);

    assert_eq!(scanner.scan(10).unwrap(), "boxed");
}

#[test]
fn close_reaches_transport() {
    let mut scanner = Scanner::new(MockTransport::new());

    scanner.stop().unwrap();
    scanner.close().unwrap();

    assert_eq!(scanner.transport().calls().last(), Some(&Call::Close));
}
