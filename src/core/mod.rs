//! # Core Protocol Components
//!
//! Low-level command packet handling and stream framing.
//!
//! This module provides the foundation for the control channel, handling
//! packet parsing, encoding, and the length-delimited wire format.
//!
//! ## Components
//! - **Packet**: typed command packets with direction-dependent payloads
//! - **Codec**: Tokio codec for framing packets over byte streams
//!
//! ## Wire Format
//! ```text
//! [Length(2)] [RequestId(2)] [CommandId(2)] [Payload(N)]
//! ```
//!
//! ## Validation
//! - Unknown command ids fail terminally, never silently degrade
//! - Trailing bytes after the last field are rejected
//! - Length validation happens before any payload is buffered

pub mod codec;
pub mod packet;
