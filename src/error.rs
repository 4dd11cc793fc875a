//! # Error Types
//!
//! Error handling for the command-channel protocol.
//!
//! This module defines all error variants that can occur while parsing or
//! encoding command packets, plus the I/O and configuration failures the
//! surrounding framing layer can hit.
//!
//! ## Error Categories
//! - **Decode Errors**: malformed packets and unknown command ids
//! - **Encode Errors**: embedded NUL bytes, oversized payloads
//! - **I/O Errors**: transport failures surfaced through the framing codec
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Example Usage
//! ```rust
//! use command_protocol::core::packet::{CommandPacket, Direction};
//! use command_protocol::error::ProtocolError;
//!
//! let result = CommandPacket::parse(&[0x11, 0x11, 0x12, 0x34], Direction::Request);
//! match result {
//!     Err(ProtocolError::UnknownCommand(id)) => assert_eq!(id, 0x1234),
//!     other => panic!("expected UnknownCommand, got {other:?}"),
//! }
//! ```

use std::io;
use thiserror::Error;

/// Decode reason strings, kept as statics so error paths allocate nothing.
/// These tags are stable: callers and tests match on them.
pub mod reasons {
    /// Buffer shorter than the 4-byte request_id + command_id header
    pub const ERR_HEADER_TOO_SHORT: &str = "packet too short for header";

    /// Ping packet text field missing its NUL terminator
    pub const ERR_PING_NO_TERMINATOR: &str = "ping data missing NUL terminator";
    /// Shell request name missing its NUL terminator
    pub const ERR_SHELL_NO_TERMINATOR: &str = "shell name missing NUL terminator";
    /// Exec request name missing its NUL terminator
    pub const ERR_EXEC_NAME_NO_TERMINATOR: &str = "exec name missing NUL terminator";
    /// Exec request command missing its NUL terminator
    pub const ERR_EXEC_COMMAND_NO_TERMINATOR: &str = "exec command missing NUL terminator";
    /// Error packet reason missing its NUL terminator
    pub const ERR_REASON_NO_TERMINATOR: &str = "error reason missing NUL terminator";

    /// Shell/Exec response payload shorter than the 2-byte session id
    pub const ERR_SESSION_ID_TRUNCATED: &str = "response missing session id";
    /// Error packet payload shorter than the 2-byte status
    pub const ERR_STATUS_TRUNCATED: &str = "error packet missing status";

    /// Bytes left over after the last expected field
    pub const ERR_TRAILING_DATA: &str = "extra data on the end";

    /// Text field bytes are not valid UTF-8
    pub const ERR_INVALID_UTF8: &str = "text field is not valid UTF-8";
}

/// ProtocolError is the primary error type for all protocol operations
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Structural violation in a decoded packet. The tag is one of the
    /// stable strings in [`reasons`].
    #[error("malformed packet: {0}")]
    MalformedPacket(&'static str),

    /// `command_id` outside the recognized set.
    #[error("unknown command: 0x{0:04x}")]
    UnknownCommand(u16),

    /// A text field handed to an encode operation contains a NUL byte,
    /// which would corrupt the payload boundary on the wire.
    #[error("text field `{0}` contains an embedded NUL byte")]
    EmbeddedNul(&'static str),

    /// Encoded body would not fit the 2-byte length prefix, or an incoming
    /// frame exceeds the configured cap.
    #[error("packet too large: {0} bytes")]
    OversizedPacket(usize),

    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
