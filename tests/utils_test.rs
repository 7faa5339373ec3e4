use std::io::Cursor;

use rofi_spotify::{error::AppError, utils};

#[test]
fn test_read_answer_trims_line() {
    let mut input = Cursor::new("  my-client-id \r\nsecond\n");

    assert_eq!(utils::read_answer(&mut input).unwrap(), "my-client-id");
    assert_eq!(utils::read_answer(&mut input).unwrap(), "second");
}

#[test]
fn test_read_answer_at_eof() {
    let mut input = Cursor::new("");

    match utils::read_answer(&mut input) {
        Err(AppError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
        other => panic!("expected EOF error, got {:?}", other),
    }
}

#[test]
fn test_now_is_unix_seconds() {
    let now = utils::now();
    // after 2020-01-01 and not in milliseconds
    assert!(now > 1_577_836_800);
    assert!(now < 10_000_000_000);
}
