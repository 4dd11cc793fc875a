//! Property-based tests using proptest
//!
//! These validate codec invariants across randomly generated inputs:
//! parsing never panics, encoding is deterministic, and well-formed
//! packets always survive a round trip.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use command_protocol::{CommandPacket, Direction};
use proptest::prelude::*;

/// Text with no NUL bytes, the only content the encoders accept
fn wire_text() -> impl Strategy<Value = String> {
    "[^\\x00]{0,64}"
}

// Property: parse never panics, whatever the bytes and direction
proptest! {
    #[test]
    fn prop_parse_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..512), request in any::<bool>()) {
        let direction = if request { Direction::Request } else { Direction::Response };
        let _ = CommandPacket::parse(&bytes, direction);
    }
}

// Property: parse is deterministic for identical input
proptest! {
    #[test]
    fn prop_parse_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let a = CommandPacket::parse(&bytes, Direction::Request);
        let b = CommandPacket::parse(&bytes, Direction::Request);
        match (a, b) {
            (Ok(x), Ok(y)) => prop_assert_eq!(x, y),
            (Err(x), Err(y)) => prop_assert_eq!(x.to_string(), y.to_string()),
            _ => prop_assert!(false, "parse must be deterministic"),
        }
    }
}

// Property: ping packets round-trip for any NUL-free data
proptest! {
    #[test]
    fn prop_ping_roundtrip(request_id in any::<u16>(), data in wire_text()) {
        let encoded = CommandPacket::encode_ping_request(request_id, &data).unwrap();
        let packet = CommandPacket::parse(&encoded[2..], Direction::Request).unwrap();
        prop_assert_eq!(packet, CommandPacket::Ping { request_id, data });
    }
}

// Property: exec requests keep name and command distinct through a round trip
proptest! {
    #[test]
    fn prop_exec_roundtrip(request_id in any::<u16>(), name in wire_text(), command in wire_text()) {
        let encoded = CommandPacket::encode_exec_request(request_id, &name, &command).unwrap();
        let packet = CommandPacket::parse(&encoded[2..], Direction::Request).unwrap();
        prop_assert_eq!(packet, CommandPacket::ExecRequest { request_id, name, command });
    }
}

// Property: responses round-trip for any session id
proptest! {
    #[test]
    fn prop_session_responses_roundtrip(request_id in any::<u16>(), session_id in any::<u16>()) {
        let encoded = CommandPacket::encode_shell_response(request_id, session_id).unwrap();
        let packet = CommandPacket::parse(&encoded[2..], Direction::Response).unwrap();
        prop_assert_eq!(packet, CommandPacket::ShellResponse { request_id, session_id });

        let encoded = CommandPacket::encode_exec_response(request_id, session_id).unwrap();
        let packet = CommandPacket::parse(&encoded[2..], Direction::Response).unwrap();
        prop_assert_eq!(packet, CommandPacket::ExecResponse { request_id, session_id });
    }
}

// Property: the length prefix always counts exactly the body
proptest! {
    #[test]
    fn prop_length_prefix_counts_body(request_id in any::<u16>(), status in any::<u16>(), reason in wire_text()) {
        let encoded = CommandPacket::encode_error(request_id, status, &reason).unwrap();
        let announced = u16::from_be_bytes([encoded[0], encoded[1]]) as usize;
        prop_assert_eq!(announced, encoded.len() - 2);
    }
}

// Property: appending any byte to a complete frame makes it malformed
proptest! {
    #[test]
    fn prop_trailing_byte_rejected(request_id in any::<u16>(), data in wire_text(), extra in any::<u8>()) {
        let encoded = CommandPacket::encode_ping_request(request_id, &data).unwrap();
        let mut body = encoded[2..].to_vec();
        body.push(extra);
        prop_assert!(CommandPacket::parse(&body, Direction::Request).is_err());
    }
}
