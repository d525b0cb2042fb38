use super::*;

#[test]
fn encodes_known_vectors() {
    assert_eq!(base64_encode(b""), "");
    assert_eq!(base64_encode(b"f"), "Zg==");
    assert_eq!(base64_encode(b"fo"), "Zm8=");
    assert_eq!(base64_encode(b"foo"), "Zm9v");
    assert_eq!(base64_encode(b"hello"), "aGVsbG8=");
}

#[test]
fn plain_sequence() {
    let seq = build_sequence("hi", Osc52Env { is_tmux: false }).unwrap();
    assert_eq!(seq, "\x1b]52;c;aGk=\x07");
}

#[test]
fn tmux_sequence_is_wrapped() {
    let seq = build_sequence("hi", Osc52Env { is_tmux: true }).unwrap();
    assert_eq!(seq, "\x1bPtmux;\x1b\x1b]52;c;aGk=\x07\x1b\\");
}

#[test]
fn oversized_text_is_rejected() {
    let big = "x".repeat(OSC52_MAX_BYTES + 1);
    let err = build_sequence(&big, Osc52Env::default()).unwrap_err();
    assert!(matches!(err, ClipboardError::TooLarge { bytes } if bytes == OSC52_MAX_BYTES + 1));
}

#[test]
fn write_sequence_writes_and_flushes() {
    let mut out = Vec::new();
    write_sequence(&mut out, "25.00 °C", Osc52Env::default()).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(OSC52_PREFIX));
    assert!(text.ends_with(OSC52_SUFFIX));
}
