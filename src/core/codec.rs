//! # Stream Framing Codec
//!
//! Tokio codec that extracts complete length-delimited command packets
//! from a byte stream and writes typed packets back out.
//!
//! The decoder accumulates bytes until the 2-byte length prefix and the
//! full frame it announces are present, then hands the frame to
//! [`CommandPacket::parse`]. Partial frames stay buffered; nothing is
//! consumed until a whole packet is available.
//!
//! ## Usage
//! ```ignore
//! use tokio_util::codec::Framed;
//!
//! let framed = Framed::new(stream, CommandCodec::new(Direction::Request));
//! ```

use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::trace;

use crate::config::MAX_FRAME_SIZE;
use crate::core::packet::{CommandPacket, Direction};
use crate::error::ProtocolError;

/// Length prefix size in bytes.
const LENGTH_PREFIX: usize = 2;

/// Framing codec for one side of the control channel.
///
/// The configured [`Direction`] describes the packets this side *receives*:
/// the initiator decodes responses, the receiver decodes requests.
#[derive(Debug, Clone, Copy)]
pub struct CommandCodec {
    direction: Direction,
    max_frame: usize,
}

impl CommandCodec {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            max_frame: MAX_FRAME_SIZE,
        }
    }

    /// Cap incoming frames below the wire maximum. Frames announcing a
    /// larger length are rejected before any payload is buffered.
    pub fn with_max_frame(direction: Direction, max_frame: usize) -> Self {
        Self {
            direction,
            max_frame,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Decoder for CommandCodec {
    type Item = CommandPacket;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<CommandPacket>, ProtocolError> {
        if src.len() < LENGTH_PREFIX {
            return Ok(None);
        }

        let frame_len = u16::from_be_bytes([src[0], src[1]]) as usize;
        if frame_len > self.max_frame {
            return Err(ProtocolError::OversizedPacket(frame_len));
        }

        if src.len() < LENGTH_PREFIX + frame_len {
            // Reserve what the rest of the frame needs and wait for more bytes
            src.reserve(LENGTH_PREFIX + frame_len - src.len());
            return Ok(None);
        }

        src.advance(LENGTH_PREFIX);
        let frame = src.split_to(frame_len);

        let packet = CommandPacket::parse(&frame, self.direction)?;
        trace!(
            request_id = packet.request_id(),
            command = ?packet.command_id(),
            frame_len,
            "decoded command packet"
        );
        Ok(Some(packet))
    }
}

impl Encoder<CommandPacket> for CommandCodec {
    type Error = ProtocolError;

    fn encode(&mut self, packet: CommandPacket, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        let bytes = packet.to_bytes()?;
        trace!(
            request_id = packet.request_id(),
            command = ?packet.command_id(),
            len = bytes.len(),
            "encoded command packet"
        );
        dst.reserve(bytes.len());
        dst.put_slice(&bytes);
        Ok(())
    }
}
