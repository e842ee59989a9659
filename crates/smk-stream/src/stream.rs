use std::io::SeekFrom;

use log::debug;

use crate::handle::Handle;

/// Seekable byte stream over an externally-supplied I/O handle.
///
/// `ByteStream` is the single point where raw bytes become typed values,
/// so the contract is deliberately narrow and total: every operation
/// returns a plain value and nothing panics or unwinds. Container parsers
/// built on top walk headers and tables by chaining typed reads and
/// checking the stream state where it matters.
///
/// ```text
///   caller-built handle ──open()──▶ ByteStream ──read/seek──▶ handle
///                                      │
///                                   close()  (also on drop)
/// ```
///
/// # Short reads and the zero sentinel
///
/// A typed read that gets fewer bytes than the value width yields `0`.
/// That `0` is indistinguishable from a legitimately zero-valued field;
/// callers that need to tell them apart must consult [`is_eos`] or track
/// the position themselves. The bytes a truncated read did consume stay
/// consumed. The `eof` flag is set only when a raw read returns exactly
/// zero bytes; a short-but-nonzero read leaves it untouched. Formats
/// with benign zero-fill at the tail lean on exactly this behavior, so
/// it is part of the contract, not an implementation detail.
///
/// [`is_eos`]: Self::is_eos
///
/// # What this type is not
///
/// There is no internal buffering and no retrying. Reads and seeks block
/// exactly as the handle's do, and concurrent use of one instance from
/// multiple threads is not supported.
#[derive(Default)]
pub struct ByteStream {
    handle: Option<Box<dyn Handle>>,
    eof: bool,
}

impl ByteStream {
    /// Create a stream in the unopened state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a handle, clearing the end-of-stream flag.
    ///
    /// A previously attached handle is closed first, so a stream can be
    /// reused across resources. Always returns `true`: an owned handle
    /// has no invalid state left to reject; failure to acquire a
    /// resource surfaces from the handle constructors
    /// ([`open_file`](crate::handle::open_file)) instead.
    pub fn open(&mut self, handle: Box<dyn Handle>) -> bool {
        self.close();
        self.handle = Some(handle);
        self.eof = false;
        true
    }

    /// Whether a handle is currently attached.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Detach and close the handle, if any.
    ///
    /// Idempotent: closing an already-closed stream is a no-op. The
    /// end-of-stream flag is left as-is; only [`open`](Self::open) or a
    /// successful read changes it.
    pub fn close(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.close();
        }
    }

    /// Read up to `buf.len()` bytes, returning the count actually read.
    ///
    /// Exactly one raw read is issued: a short count is returned as-is,
    /// never retried. The end-of-stream flag becomes `(count == 0)`: a
    /// read error counts as zero bytes, and a zero-length `buf` therefore
    /// also sets the flag. On an unopened stream this reads nothing.
    #[must_use]
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> usize {
        let Some(handle) = self.handle.as_mut() else {
            self.eof = true;
            return 0;
        };

        let count = match handle.read(buf) {
            Ok(count) => count,
            Err(err) => {
                debug!("read of {} bytes failed: {err}", buf.len());
                0
            }
        };

        self.eof = count == 0;
        count
    }

    /// Read a little-endian `u32`, or `0` if fewer than 4 bytes remain.
    #[must_use]
    pub fn read_u32_le(&mut self) -> u32 {
        let mut raw = [0u8; 4];
        if self.read_bytes(&mut raw) < 4 {
            return 0;
        }
        u32::from_le_bytes(raw)
    }

    /// Read a big-endian `u32`, or `0` if fewer than 4 bytes remain.
    #[must_use]
    pub fn read_u32_be(&mut self) -> u32 {
        let mut raw = [0u8; 4];
        if self.read_bytes(&mut raw) < 4 {
            return 0;
        }
        u32::from_be_bytes(raw)
    }

    /// Read a little-endian `u16`, or `0` if fewer than 2 bytes remain.
    #[must_use]
    pub fn read_u16_le(&mut self) -> u16 {
        let mut raw = [0u8; 2];
        if self.read_bytes(&mut raw) < 2 {
            return 0;
        }
        u16::from_le_bytes(raw)
    }

    /// Read a big-endian `u16`, or `0` if fewer than 2 bytes remain.
    #[must_use]
    pub fn read_u16_be(&mut self) -> u16 {
        let mut raw = [0u8; 2];
        if self.read_bytes(&mut raw) < 2 {
            return 0;
        }
        u16::from_be_bytes(raw)
    }

    /// Read a single byte, or `0` at end of stream.
    #[must_use]
    pub fn read_u8(&mut self) -> u8 {
        let mut raw = [0u8; 1];
        if self.read_bytes(&mut raw) < 1 {
            return 0;
        }
        raw[0]
    }

    /// Reposition the stream, returning whether the seek succeeded.
    ///
    /// Seeking never alters the end-of-stream flag. On failure no
    /// rollback is attempted; the resulting position is whatever the
    /// handle left it at, so callers that care must re-query
    /// [`position`](Self::position) rather than assume a no-op.
    pub fn seek(&mut self, pos: SeekFrom) -> bool {
        let Some(handle) = self.handle.as_mut() else {
            return false;
        };

        match handle.seek(pos) {
            Ok(_) => true,
            Err(err) => {
                debug!("seek to {pos:?} failed: {err}");
                false
            }
        }
    }

    /// Advance (or rewind, for negative `offset`) relative to the
    /// current position.
    pub fn skip(&mut self, offset: i64) -> bool {
        self.seek(SeekFrom::Current(offset))
    }

    /// Current absolute offset as reported by the handle.
    ///
    /// Returns `0` when the stream is unopened or the handle cannot
    /// report a position.
    #[must_use]
    pub fn position(&mut self) -> u64 {
        let Some(handle) = self.handle.as_mut() else {
            return 0;
        };

        match handle.tell() {
            Ok(pos) => pos,
            Err(err) => {
                debug!("tell failed: {err}");
                0
            }
        }
    }

    /// Whether the most recent raw read returned zero bytes.
    #[must_use]
    pub fn is_eos(&self) -> bool {
        self.eof
    }
}

impl Drop for ByteStream {
    fn drop(&mut self) {
        self.close();
    }
}
