//! # Command Protocol
//!
//! Protocol core for the command channel of a tunneling session.
//!
//! Two peers exchange ping, shell, exec, and error packets over an
//! encrypted tunnel owned by outer layers. This crate defines the binary
//! wire format of those packets and the parse/encode logic, plus a Tokio
//! codec for framing them over any byte stream.
//!
//! ## Components
//! - [`core::packet`] — typed packets, parsing, encoding
//! - [`core::codec`] — length-delimited stream framing
//! - [`config`] — wire constants and TOML configuration
//! - [`error`] — the protocol error taxonomy
//!
//! ## Example
//! ```rust
//! use command_protocol::{CommandPacket, Direction};
//!
//! let bytes = CommandPacket::encode_ping_request(0x1111, "hello")?;
//! // the framing layer strips the 2-byte length prefix before parsing
//! let packet = CommandPacket::parse(&bytes[2..], Direction::Request)?;
//! assert_eq!(packet.request_id(), 0x1111);
//! # Ok::<(), command_protocol::ProtocolError>(())
//! ```
//!
//! ## Concurrency
//! The codec is a pure, stateless function set: no shared mutable state,
//! no I/O, no suspension points. It is safe to call from any number of
//! threads or tasks without synchronization.

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::codec::CommandCodec;
pub use crate::core::packet::{CommandId, CommandPacket, Direction};
pub use crate::error::{ProtocolError, Result};
