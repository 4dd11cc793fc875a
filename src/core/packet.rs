//! # Command Packets
//!
//! Typed representation of the control-channel commands exchanged between
//! the two peers of a tunneling session, plus the parse/encode logic for
//! their binary wire format.
//!
//! ## Wire Format
//! ```text
//! [Length(2)] [RequestId(2)] [CommandId(2)] [Payload(N)]
//! ```
//! All integers are big-endian. Text fields are raw bytes followed by a
//! single NUL terminator; `session_id` and `status` are plain 2-byte
//! integers with no terminator. The leading length prefix counts every
//! byte after itself and is written by the encode operations; [`parse`]
//! expects it already stripped by the framing layer.
//!
//! ## Direction
//! Shell and Exec carry different payloads depending on whether the packet
//! travels initiator→peer (request) or peer→initiator (response), so the
//! caller must say which side of the channel the bytes came from. Ping and
//! Error look the same in both directions.
//!
//! [`parse`]: CommandPacket::parse

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{reasons, ProtocolError, Result};

/// Which way a packet is travelling on the control channel.
///
/// The payload shape of Shell and Exec packets depends on this, so it is
/// an input to [`CommandPacket::parse`] rather than something recoverable
/// from the bytes themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Initiator → peer
    Request,
    /// Peer → initiator
    Response,
}

/// Wire discriminator selecting the payload shape.
///
/// Closed enumeration: bytes arriving off the wire with any other value
/// fail [`CommandPacket::parse`] with
/// [`ProtocolError::UnknownCommand`]; once a packet is typed, an unknown
/// command is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u16)]
pub enum CommandId {
    Ping = 0x0000,
    Shell = 0x0001,
    Exec = 0x0002,
    /// Sentinel value reserved for error packets, valid in either direction.
    Error = 0xFFFF,
}

impl CommandId {
    /// Map a raw wire value onto the closed set, or `None`.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0000 => Some(CommandId::Ping),
            0x0001 => Some(CommandId::Shell),
            0x0002 => Some(CommandId::Exec),
            0xFFFF => Some(CommandId::Error),
            _ => None,
        }
    }

    /// The 16-bit value written on the wire.
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

/// A fully decoded control-channel packet.
///
/// One case per (command, direction) combination, so illegal field
/// combinations (a Shell response carrying a `name`, say) cannot be
/// constructed. Ping and Error have a single case because their payloads
/// are identical in both directions.
///
/// Values are immutable once built: one is produced per decode or encode
/// call and owned by the caller from then on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandPacket {
    /// Keepalive probe or reply; `data` is echoed back verbatim.
    Ping { request_id: u16, data: String },
    /// Ask the peer to spawn a shell session named `name`.
    ShellRequest { request_id: u16, name: String },
    /// Peer's answer to a shell request: the session it opened.
    ShellResponse { request_id: u16, session_id: u16 },
    /// Ask the peer to run `command` in a session named `name`.
    ExecRequest {
        request_id: u16,
        name: String,
        command: String,
    },
    /// Peer's answer to an exec request: the session it opened.
    ExecResponse { request_id: u16, session_id: u16 },
    /// Failure report, valid in either direction.
    Error {
        request_id: u16,
        status: u16,
        reason: String,
    },
}

impl CommandPacket {
    /// Parse one complete header-plus-payload buffer (length prefix
    /// already stripped by the framing layer) into a typed packet.
    ///
    /// Pure and deterministic: identical bytes and direction always yield
    /// the identical packet or the identical failure.
    ///
    /// # Errors
    /// - [`ProtocolError::MalformedPacket`] for structural violations:
    ///   fewer than 4 header bytes, a text field with no NUL terminator,
    ///   a truncated fixed field, or bytes left over after the last field.
    /// - [`ProtocolError::UnknownCommand`] when `command_id` is outside
    ///   the recognized set.
    pub fn parse(bytes: &[u8], direction: Direction) -> Result<CommandPacket> {
        if bytes.len() < 4 {
            return Err(ProtocolError::MalformedPacket(reasons::ERR_HEADER_TOO_SHORT));
        }

        let request_id = u16::from_be_bytes([bytes[0], bytes[1]]);
        let raw_command = u16::from_be_bytes([bytes[2], bytes[3]]);
        let payload = &bytes[4..];

        let command = CommandId::from_u16(raw_command)
            .ok_or(ProtocolError::UnknownCommand(raw_command))?;

        let packet = match (command, direction) {
            (CommandId::Ping, _) => {
                let (data, rest) = take_text(payload, reasons::ERR_PING_NO_TERMINATOR)?;
                expect_empty(rest)?;
                CommandPacket::Ping { request_id, data }
            }
            (CommandId::Shell, Direction::Request) => {
                let (name, rest) = take_text(payload, reasons::ERR_SHELL_NO_TERMINATOR)?;
                expect_empty(rest)?;
                CommandPacket::ShellRequest { request_id, name }
            }
            (CommandId::Shell, Direction::Response) => {
                let (session_id, rest) = take_u16(payload, reasons::ERR_SESSION_ID_TRUNCATED)?;
                expect_empty(rest)?;
                CommandPacket::ShellResponse {
                    request_id,
                    session_id,
                }
            }
            (CommandId::Exec, Direction::Request) => {
                let (name, rest) = take_text(payload, reasons::ERR_EXEC_NAME_NO_TERMINATOR)?;
                let (cmd, rest) = take_text(rest, reasons::ERR_EXEC_COMMAND_NO_TERMINATOR)?;
                expect_empty(rest)?;
                CommandPacket::ExecRequest {
                    request_id,
                    name,
                    command: cmd,
                }
            }
            (CommandId::Exec, Direction::Response) => {
                let (session_id, rest) = take_u16(payload, reasons::ERR_SESSION_ID_TRUNCATED)?;
                expect_empty(rest)?;
                CommandPacket::ExecResponse {
                    request_id,
                    session_id,
                }
            }
            (CommandId::Error, _) => {
                let (status, rest) = take_u16(payload, reasons::ERR_STATUS_TRUNCATED)?;
                let (reason, rest) = take_text(rest, reasons::ERR_REASON_NO_TERMINATOR)?;
                expect_empty(rest)?;
                CommandPacket::Error {
                    request_id,
                    status,
                    reason,
                }
            }
        };

        Ok(packet)
    }

    /// Serialize to length-prefixed wire bytes:
    /// `len ++ request_id ++ command_id ++ payload`.
    ///
    /// # Errors
    /// - [`ProtocolError::EmbeddedNul`] if a text field contains a NUL
    ///   byte, which would shift the payload boundary for the peer.
    /// - [`ProtocolError::OversizedPacket`] if the body would not fit the
    ///   2-byte length prefix.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut payload = Vec::new();
        match self {
            CommandPacket::Ping { data, .. } => put_text(&mut payload, "data", data)?,
            CommandPacket::ShellRequest { name, .. } => put_text(&mut payload, "name", name)?,
            CommandPacket::ShellResponse { session_id, .. } => {
                payload.extend_from_slice(&session_id.to_be_bytes());
            }
            CommandPacket::ExecRequest { name, command, .. } => {
                put_text(&mut payload, "name", name)?;
                put_text(&mut payload, "command", command)?;
            }
            CommandPacket::ExecResponse { session_id, .. } => {
                payload.extend_from_slice(&session_id.to_be_bytes());
            }
            CommandPacket::Error { status, reason, .. } => {
                payload.extend_from_slice(&status.to_be_bytes());
                put_text(&mut payload, "reason", reason)?;
            }
        }

        add_header(self.request_id(), self.command_id(), &payload)
    }

    /// Correlation token pairing this packet with its counterpart.
    pub fn request_id(&self) -> u16 {
        match self {
            CommandPacket::Ping { request_id, .. }
            | CommandPacket::ShellRequest { request_id, .. }
            | CommandPacket::ShellResponse { request_id, .. }
            | CommandPacket::ExecRequest { request_id, .. }
            | CommandPacket::ExecResponse { request_id, .. }
            | CommandPacket::Error { request_id, .. } => *request_id,
        }
    }

    /// The wire discriminator this packet serializes under. Error packets
    /// always report the 0xFFFF sentinel; no other value is possible.
    pub fn command_id(&self) -> CommandId {
        match self {
            CommandPacket::Ping { .. } => CommandId::Ping,
            CommandPacket::ShellRequest { .. } | CommandPacket::ShellResponse { .. } => {
                CommandId::Shell
            }
            CommandPacket::ExecRequest { .. } | CommandPacket::ExecResponse { .. } => {
                CommandId::Exec
            }
            CommandPacket::Error { .. } => CommandId::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CommandPacket::Error { .. })
    }

    /// One-line human-readable summary, same output as `Display`.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    // Per-variant encode operations. Each builds the typed value and
    // serializes it, so the header layout lives in one place.

    pub fn encode_ping_request(request_id: u16, data: &str) -> Result<Vec<u8>> {
        CommandPacket::Ping {
            request_id,
            data: data.to_owned(),
        }
        .to_bytes()
    }

    pub fn encode_ping_response(request_id: u16, data: &str) -> Result<Vec<u8>> {
        CommandPacket::Ping {
            request_id,
            data: data.to_owned(),
        }
        .to_bytes()
    }

    pub fn encode_shell_request(request_id: u16, name: &str) -> Result<Vec<u8>> {
        CommandPacket::ShellRequest {
            request_id,
            name: name.to_owned(),
        }
        .to_bytes()
    }

    pub fn encode_shell_response(request_id: u16, session_id: u16) -> Result<Vec<u8>> {
        CommandPacket::ShellResponse {
            request_id,
            session_id,
        }
        .to_bytes()
    }

    pub fn encode_exec_request(request_id: u16, name: &str, command: &str) -> Result<Vec<u8>> {
        CommandPacket::ExecRequest {
            request_id,
            name: name.to_owned(),
            command: command.to_owned(),
        }
        .to_bytes()
    }

    pub fn encode_exec_response(request_id: u16, session_id: u16) -> Result<Vec<u8>> {
        CommandPacket::ExecResponse {
            request_id,
            session_id,
        }
        .to_bytes()
    }

    /// Error packets take no command id: the 0xFFFF sentinel is fixed by
    /// the variant itself.
    pub fn encode_error(request_id: u16, status: u16, reason: &str) -> Result<Vec<u8>> {
        CommandPacket::Error {
            request_id,
            status,
            reason: reason.to_owned(),
        }
        .to_bytes()
    }
}

impl fmt::Display for CommandPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandPacket::Ping { request_id, data } => {
                write!(f, "PING :: request_id = 0x{request_id:04x}, data = {data}")
            }
            CommandPacket::ShellRequest { request_id, name } => {
                write!(f, "SHELL :: request_id = 0x{request_id:04x}, name = {name}")
            }
            CommandPacket::ShellResponse {
                request_id,
                session_id,
            } => {
                write!(
                    f,
                    "SHELL :: request_id = 0x{request_id:04x}, session_id = 0x{session_id:04x}"
                )
            }
            CommandPacket::ExecRequest {
                request_id,
                name,
                command,
            } => {
                write!(
                    f,
                    "EXEC :: request_id = 0x{request_id:04x}, name = {name}, command = {command}"
                )
            }
            CommandPacket::ExecResponse {
                request_id,
                session_id,
            } => {
                write!(
                    f,
                    "EXEC :: request_id = 0x{request_id:04x}, session_id = 0x{session_id:04x}"
                )
            }
            CommandPacket::Error {
                request_id,
                status,
                reason,
            } => {
                write!(
                    f,
                    "ERROR :: request_id = 0x{request_id:04x}, status = 0x{status:04x}, reason = {reason}"
                )
            }
        }
    }
}

/// Slice a NUL-terminated text field off the front of `payload`.
/// Returns the decoded text and the bytes after the terminator.
fn take_text<'a>(payload: &'a [u8], missing: &'static str) -> Result<(String, &'a [u8])> {
    let nul = payload
        .iter()
        .position(|&b| b == 0)
        .ok_or(ProtocolError::MalformedPacket(missing))?;

    let text = std::str::from_utf8(&payload[..nul])
        .map_err(|_| ProtocolError::MalformedPacket(reasons::ERR_INVALID_UTF8))?;

    Ok((text.to_owned(), &payload[nul + 1..]))
}

/// Read a fixed 2-byte big-endian field off the front of `payload`.
fn take_u16<'a>(payload: &'a [u8], missing: &'static str) -> Result<(u16, &'a [u8])> {
    if payload.len() < 2 {
        return Err(ProtocolError::MalformedPacket(missing));
    }
    Ok((u16::from_be_bytes([payload[0], payload[1]]), &payload[2..]))
}

/// Zero bytes must remain once the last expected field is consumed.
fn expect_empty(rest: &[u8]) -> Result<()> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ProtocolError::MalformedPacket(reasons::ERR_TRAILING_DATA))
    }
}

/// Append a text field with its NUL terminator, rejecting embedded NULs.
fn put_text(buf: &mut Vec<u8>, field: &'static str, text: &str) -> Result<()> {
    if text.as_bytes().contains(&0) {
        return Err(ProtocolError::EmbeddedNul(field));
    }
    buf.extend_from_slice(text.as_bytes());
    buf.push(0);
    Ok(())
}

/// Prepend `request_id`, `command_id`, and the 2-byte length prefix.
fn add_header(request_id: u16, command_id: CommandId, payload: &[u8]) -> Result<Vec<u8>> {
    let body_len = 4 + payload.len();
    if body_len > u16::MAX as usize {
        return Err(ProtocolError::OversizedPacket(body_len));
    }

    let mut out = Vec::with_capacity(2 + body_len);
    out.extend_from_slice(&(body_len as u16).to_be_bytes());
    out.extend_from_slice(&request_id.to_be_bytes());
    out.extend_from_slice(&command_id.as_u16().to_be_bytes());
    out.extend_from_slice(payload);
    Ok(out)
}
