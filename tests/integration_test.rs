//! Integration tests for hexpeek.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use hexpeek::{DecodePolicy, EMPTY_RDB_HEX, HexError, decode_hex, render_text};
use test_case::test_case;

#[test]
fn test_ascii_scenario() {
    let buffer = decode_hex("41424344").expect("valid hex");
    assert_eq!(buffer.as_bytes(), &[0x41, 0x42, 0x43, 0x44]);

    let rendering = render_text(buffer.as_bytes(), DecodePolicy::Ignore);
    assert_eq!(rendering.text, "ABCD");
    assert_eq!(buffer.to_string(), "b\"ABCD\"");
}

#[test]
fn test_invalid_bytes_scenario() {
    let buffer = decode_hex("ff00").expect("valid hex");
    assert_eq!(buffer.as_bytes(), &[0xff, 0x00]);

    assert_eq!(render_text(buffer.as_bytes(), DecodePolicy::Ignore).text, "\0");
    assert_eq!(
        render_text(buffer.as_bytes(), DecodePolicy::Replace).text,
        "\u{FFFD}\0"
    );
    assert_eq!(buffer.to_string(), r#"b"\xff\x00""#);
}

#[test]
fn test_empty_snapshot_scenario() {
    let buffer = decode_hex(EMPTY_RDB_HEX).expect("embedded literal is valid");
    assert_eq!(buffer.len(), 88);

    let rendering = render_text(buffer.as_bytes(), DecodePolicy::Ignore);
    assert!(rendering.text.starts_with("REDIS0011"));
    assert!(rendering.text.contains("redis-ver"));
    assert!(rendering.text.contains("used-mem°"));
    assert!(!rendering.is_lossless());

    let raw = buffer.to_string();
    assert!(raw.contains("REDIS0011"));
    assert!(raw.contains("redis-ver"));
    assert!(raw.ends_with(r#"\xffZ\xa2""#));
}

#[test_case("abc", HexError::OddLength { length: 3 }; "odd length")]
#[test_case("4", HexError::OddLength { length: 1 }; "single digit")]
#[test_case("0g", HexError::InvalidCharacter { character: 'g', index: 1 }; "non hex letter")]
#[test_case("41-2", HexError::InvalidCharacter { character: '-', index: 2 }; "punctuation")]
fn test_malformed_hex(input: &str, expected: HexError) {
    assert_eq!(decode_hex(input), Err(expected));
}

mod property_tests {
    use hexpeek::{DecodePolicy, decode_hex, render_text};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn hex_round_trip(s in "([0-9a-fA-F]{2}){0,64}") {
            let buffer = decode_hex(&s).unwrap();
            prop_assert_eq!(buffer.to_hex(), s.to_lowercase());
        }

        #[test]
        fn length_is_half_digit_count(s in "([0-9a-f]{2}){0,64}") {
            let buffer = decode_hex(&s).unwrap();
            prop_assert_eq!(buffer.len(), s.len() / 2);
        }

        #[test]
        fn odd_length_always_fails(s in "[0-9a-f]([0-9a-f]{2}){0,32}") {
            prop_assert!(decode_hex(&s).is_err());
        }

        #[test]
        fn ignore_never_grows_and_replace_matches_lossy(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
            let ignored = render_text(&bytes, DecodePolicy::Ignore);
            prop_assert!(ignored.text.len() <= bytes.len());

            let replaced = render_text(&bytes, DecodePolicy::Replace);
            prop_assert_eq!(replaced.text, String::from_utf8_lossy(&bytes).into_owned());
        }

        #[test]
        fn raw_is_ascii(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
            let raw = hexpeek::ByteBuffer::from(bytes).to_string();
            prop_assert!(raw.is_ascii());
            prop_assert!(raw.starts_with("b\"") && raw.ends_with('"'));
        }
    }
}

/// Binary tests.
mod cli_tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn hexpeek() -> Command {
        let mut cmd = Command::cargo_bin("hexpeek").expect("binary builds");
        cmd.env_remove("HEXPEEK_HEX").env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn test_default_snapshot() {
        hexpeek()
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Decoded Text (UTF-8): REDIS0011"))
            .stdout(predicate::str::contains("Binary Data: b\"REDIS0011\\xfa\\tredis-ver"))
            .stderr(predicate::str::contains("could not be decoded"));
    }

    #[test]
    fn test_ascii_input() {
        hexpeek()
            .arg("41424344")
            .assert()
            .success()
            .stdout("Decoded Text (UTF-8): ABCD\nBinary Data: b\"ABCD\"\n")
            .stderr("");
    }

    #[test]
    fn test_input_from_env() {
        hexpeek()
            .env("HEXPEEK_HEX", "6f6b")
            .assert()
            .success()
            .stdout(predicate::str::contains("Decoded Text (UTF-8): ok\n"));
    }

    #[test]
    fn test_replace_policy() {
        hexpeek()
            .args(["ff00", "--policy", "replace"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\u{FFFD}"))
            .stdout(predicate::str::contains(r#"Binary Data: b"\xff\x00""#));
    }

    #[test]
    fn test_malformed_input_fails_without_output() {
        hexpeek()
            .arg("abc")
            .assert()
            .failure()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("Error: format error: odd number of hex digits"));
    }

    #[test]
    fn test_non_hex_input_fails_without_output() {
        hexpeek()
            .arg("0g")
            .assert()
            .failure()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("invalid hex character 'g' at index 1"));
    }

    #[test]
    fn test_unknown_policy() {
        hexpeek()
            .args(["41", "--policy", "strict"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown decode policy: strict"));
    }

    #[test]
    fn test_json_output() {
        let output = hexpeek()
            .args(["41424344", "--format", "json"])
            .output()
            .expect("run binary");
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
        assert_eq!(value["length"], 4);
        assert_eq!(value["hex"], "41424344");
        assert_eq!(value["text"], "ABCD");
        assert_eq!(value["raw"], "b\"ABCD\"");
    }

    #[test]
    fn test_json_error() {
        hexpeek()
            .args(["zz", "--format", "json"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("\"error\""));
    }
}
