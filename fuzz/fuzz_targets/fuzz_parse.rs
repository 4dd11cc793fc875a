#![no_main]

use command_protocol::{CommandPacket, Direction};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&[u8], bool)| {
    // Fuzz packet parsing - test for panics, crashes, infinite loops
    let (data, request) = input;
    let direction = if request {
        Direction::Request
    } else {
        Direction::Response
    };
    let _ = CommandPacket::parse(data, direction);
});
