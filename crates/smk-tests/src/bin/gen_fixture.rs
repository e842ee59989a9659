//! Golden fixture generator for the stream test suite.
//!
//! This binary creates the fixture files under `tests/golden/`. Run it once
//! after changing a fixture's layout to regenerate the committed bytes.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen_fixture -p smk-tests
//! ```
//!
//! # Generated fixtures
//!
//! | File             | Contents                                            |
//! |------------------|-----------------------------------------------------|
//! | typed_values.bin | u32 LE, u32 BE, u16 LE, u16 BE, u8 (known values)   |
//! | zero_fill.bin    | one u32 LE followed by a zero-filled tail           |

#![allow(clippy::pedantic)]

use std::path::Path;

fn main() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let golden_dir = manifest_dir.join("tests/golden");

    generate_typed_values(&golden_dir);
    generate_zero_fill(&golden_dir);

    println!("All golden fixtures written to {}", golden_dir.display());
}

fn write_file(path: &Path, data: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create_dir_all");
    }
    std::fs::write(path, data).expect("write_file");
    println!("  wrote {}", path.display());
}

/// The canonical typed-value walk: one value of each width in each order.
fn generate_typed_values(golden_dir: &Path) {
    let mut payload = Vec::new();
    payload.extend_from_slice(&0xDEAD_BEEF_u32.to_le_bytes());
    payload.extend_from_slice(&0xDEAD_BEEF_u32.to_be_bytes());
    payload.extend_from_slice(&0xCAFE_u16.to_le_bytes());
    payload.extend_from_slice(&0xCAFE_u16.to_be_bytes());
    payload.push(0x7F);

    write_file(&golden_dir.join("typed_values.bin"), &payload);
}

/// A value followed by zero padding, the tail shape that makes the
/// zero-sentinel short-read behavior benign in practice.
fn generate_zero_fill(golden_dir: &Path) {
    let mut payload = Vec::new();
    payload.extend_from_slice(&0x0000_0010_u32.to_le_bytes());
    payload.extend_from_slice(&[0u8; 6]);

    write_file(&golden_dir.join("zero_fill.bin"), &payload);
}
