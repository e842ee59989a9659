#![no_main]

use libfuzzer_sys::fuzz_target;
use smk_stream::{ByteStream, from_bytes};

// Fuzz target: typed reads over arbitrary bytes.
//
// Catches bugs in:
// - Short-read collapse to the zero sentinel
// - eos flag transitions at the tail
// - Position accounting across mixed-width reads
fuzz_target!(|data: &[u8]| {
    let len = data.len() as u64;

    let mut stream = ByteStream::new();
    stream.open(from_bytes(data.to_vec()));

    loop {
        let before = stream.position();
        let _ = stream.read_u32_le();
        let _ = stream.read_u16_be();
        let _ = stream.read_u8();
        let after = stream.position();

        assert!(after <= len);
        if stream.is_eos() {
            break;
        }
        // Forward progress: anything short of eos consumed at least a byte.
        assert!(after > before);
    }
});
