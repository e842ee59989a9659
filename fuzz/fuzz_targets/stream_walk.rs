#![no_main]

use std::io::SeekFrom;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use smk_stream::{ByteStream, from_bytes};

// Fuzz target: arbitrary operation sequences against an arbitrary buffer.
//
// The API is total: every operation returns a plain value for any input
// and any stream state, including after close. Catches panics, position
// bookkeeping errors, and eos flag corruption across op interleavings.

#[derive(Arbitrary, Debug)]
enum Op {
    ReadU8,
    ReadU16Le,
    ReadU16Be,
    ReadU32Le,
    ReadU32Be,
    ReadRun(u8),
    Skip(i16),
    SeekStart(u16),
    SeekEnd(i16),
    Close,
    Reopen,
}

fuzz_target!(|input: (Vec<u8>, Vec<Op>)| {
    let (bytes, ops) = input;

    let mut stream = ByteStream::new();
    stream.open(from_bytes(bytes.clone()));

    for op in ops {
        match op {
            Op::ReadU8 => {
                let _ = stream.read_u8();
            }
            Op::ReadU16Le => {
                let _ = stream.read_u16_le();
            }
            Op::ReadU16Be => {
                let _ = stream.read_u16_be();
            }
            Op::ReadU32Le => {
                let _ = stream.read_u32_le();
            }
            Op::ReadU32Be => {
                let _ = stream.read_u32_be();
            }
            Op::ReadRun(n) => {
                let mut buf = vec![0u8; usize::from(n)];
                let count = stream.read_bytes(&mut buf);
                assert!(count <= buf.len());
            }
            Op::Skip(offset) => {
                let _ = stream.skip(i64::from(offset));
            }
            Op::SeekStart(offset) => {
                if stream.seek(SeekFrom::Start(u64::from(offset))) {
                    assert_eq!(stream.position(), u64::from(offset));
                }
            }
            Op::SeekEnd(offset) => {
                let _ = stream.seek(SeekFrom::End(i64::from(offset)));
            }
            Op::Close => {
                stream.close();
                assert!(!stream.is_open());
            }
            Op::Reopen => {
                stream.open(from_bytes(bytes.clone()));
                assert!(stream.is_open());
                assert!(!stream.is_eos());
            }
        }
    }
});
