#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Round-trip tests: every variant/direction pair survives encode → parse

use command_protocol::{CommandPacket, Direction};

/// parse() expects the 2-byte length prefix stripped, as the framing
/// layer would deliver it.
fn body(encoded: &[u8]) -> &[u8] {
    let len = u16::from_be_bytes([encoded[0], encoded[1]]) as usize;
    assert_eq!(len, encoded.len() - 2);
    &encoded[2..]
}

#[test]
fn test_ping_request_roundtrip() {
    let encoded = CommandPacket::encode_ping_request(0x1111, "ping request").unwrap();
    let packet = CommandPacket::parse(body(&encoded), Direction::Request).unwrap();
    assert_eq!(
        packet,
        CommandPacket::Ping {
            request_id: 0x1111,
            data: "ping request".to_owned(),
        }
    );
}

#[test]
fn test_ping_response_roundtrip() {
    let encoded = CommandPacket::encode_ping_response(0x2222, "ping response").unwrap();
    let packet = CommandPacket::parse(body(&encoded), Direction::Response).unwrap();
    assert_eq!(
        packet,
        CommandPacket::Ping {
            request_id: 0x2222,
            data: "ping response".to_owned(),
        }
    );
}

#[test]
fn test_shell_request_roundtrip() {
    let encoded = CommandPacket::encode_shell_request(0x3333, "shell name").unwrap();
    let packet = CommandPacket::parse(body(&encoded), Direction::Request).unwrap();
    assert_eq!(
        packet,
        CommandPacket::ShellRequest {
            request_id: 0x3333,
            name: "shell name".to_owned(),
        }
    );
}

#[test]
fn test_shell_response_roundtrip() {
    let encoded = CommandPacket::encode_shell_response(0x4444, 0x1234).unwrap();
    let packet = CommandPacket::parse(body(&encoded), Direction::Response).unwrap();
    assert_eq!(
        packet,
        CommandPacket::ShellResponse {
            request_id: 0x4444,
            session_id: 0x1234,
        }
    );
}

#[test]
fn test_exec_request_roundtrip_keeps_both_fields() {
    let encoded = CommandPacket::encode_exec_request(0x5555, "exec name", "exec command").unwrap();
    let packet = CommandPacket::parse(body(&encoded), Direction::Request).unwrap();
    assert_eq!(
        packet,
        CommandPacket::ExecRequest {
            request_id: 0x5555,
            name: "exec name".to_owned(),
            command: "exec command".to_owned(),
        }
    );
}

#[test]
fn test_exec_response_roundtrip() {
    let encoded = CommandPacket::encode_exec_response(0x6666, 0x4321).unwrap();
    let packet = CommandPacket::parse(body(&encoded), Direction::Response).unwrap();
    assert_eq!(
        packet,
        CommandPacket::ExecResponse {
            request_id: 0x6666,
            session_id: 0x4321,
        }
    );
}

#[test]
fn test_error_roundtrip_both_directions() {
    let encoded = CommandPacket::encode_error(0x7777, 0x00FF, "session refused").unwrap();
    for direction in [Direction::Request, Direction::Response] {
        let packet = CommandPacket::parse(body(&encoded), direction).unwrap();
        assert_eq!(
            packet,
            CommandPacket::Error {
                request_id: 0x7777,
                status: 0x00FF,
                reason: "session refused".to_owned(),
            }
        );
    }
}

#[test]
fn test_to_bytes_matches_per_variant_encoders() {
    let packet = CommandPacket::ExecRequest {
        request_id: 0x0042,
        name: "n".to_owned(),
        command: "c".to_owned(),
    };
    assert_eq!(
        packet.to_bytes().unwrap(),
        CommandPacket::encode_exec_request(0x0042, "n", "c").unwrap()
    );
}

#[test]
fn test_encoding_is_deterministic() {
    let a = CommandPacket::encode_exec_request(0x0001, "name", "command").unwrap();
    let b = CommandPacket::encode_exec_request(0x0001, "name", "command").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_known_wire_bytes_for_shell_response() {
    let encoded = CommandPacket::encode_shell_response(0x4444, 0x1234).unwrap();
    // len=6, request_id=0x4444, command_id=0x0001, session_id=0x1234
    assert_eq!(
        encoded,
        vec![0x00, 0x06, 0x44, 0x44, 0x00, 0x01, 0x12, 0x34]
    );
}

#[test]
fn test_known_wire_bytes_for_ping() {
    let encoded = CommandPacket::encode_ping_request(0x1111, "hi").unwrap();
    // len=7, request_id=0x1111, command_id=0x0000, "hi\0"
    assert_eq!(
        encoded,
        vec![0x00, 0x07, 0x11, 0x11, 0x00, 0x00, b'h', b'i', 0x00]
    );
}

#[test]
fn test_known_wire_bytes_for_error() {
    let encoded = CommandPacket::encode_error(0x0001, 0x0002, "no").unwrap();
    // len=9, request_id, sentinel 0xFFFF, status, "no\0"
    assert_eq!(
        encoded,
        vec![0x00, 0x09, 0x00, 0x01, 0xFF, 0xFF, 0x00, 0x02, b'n', b'o', 0x00]
    );
}

#[test]
fn test_describe_per_variant() {
    let encoded = CommandPacket::encode_exec_request(0x5555, "exec name", "exec command").unwrap();
    let packet = CommandPacket::parse(body(&encoded), Direction::Request).unwrap();
    assert_eq!(
        packet.describe(),
        "EXEC :: request_id = 0x5555, name = exec name, command = exec command"
    );

    let encoded = CommandPacket::encode_error(0x7777, 0x00FF, "nope").unwrap();
    let packet = CommandPacket::parse(body(&encoded), Direction::Response).unwrap();
    assert_eq!(
        packet.describe(),
        "ERROR :: request_id = 0x7777, status = 0x00ff, reason = nope"
    );
}
