#![no_main]

use bytes::BytesMut;
use command_protocol::{CommandCodec, Direction};
use libfuzzer_sys::fuzz_target;
use tokio_util::codec::Decoder;

fuzz_target!(|data: &[u8]| {
    // Fuzz stream framing - arbitrary fragments must never panic or loop
    let mut codec = CommandCodec::new(Direction::Request);
    let mut buf = BytesMut::from(data);
    while let Ok(Some(_)) = codec.decode(&mut buf) {}
});
