use std::fs::File;
use std::io::{Cursor, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::StreamError;

/// Capability set a byte source must provide to back a
/// [`ByteStream`](crate::ByteStream).
///
/// The stream is backend-agnostic: it calls exactly these five operations
/// and nothing else, so any linear, seekable resource can sit behind it.
///
/// ```text
///   read(buf)   → bytes actually read (0 = end of resource or error)
///   seek(pos)   → new absolute offset
///   tell()      → current absolute offset
///   close()     → explicit teardown before drop (optional)
/// ```
///
/// Every `Read + Seek` type is a handle via the blanket impl below, which
/// is the one production adapter: `std::fs::File` for on-disk sources,
/// `std::io::Cursor` for in-memory ones. Types with failure modes that
/// `Read + Seek` cannot express can implement the trait directly.
pub trait Handle {
    /// Read up to `buf.len()` bytes into `buf`, returning the count
    /// actually read. A short count is not an error.
    ///
    /// # Errors
    ///
    /// Whatever the underlying resource reports. The stream collapses an
    /// `Err` into a zero-byte read, so implementations should not retry
    /// internally on behalf of the caller.
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize>;

    /// Reposition to `pos`, returning the new absolute offset.
    ///
    /// # Errors
    ///
    /// Whatever the underlying resource reports, e.g. seeking before the
    /// start of the resource.
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64>;

    /// Current absolute offset.
    ///
    /// # Errors
    ///
    /// Whatever the underlying resource reports.
    fn tell(&mut self) -> std::io::Result<u64>;

    /// Explicit teardown hook, invoked once when the owning stream closes.
    ///
    /// The default is a no-op: for `File` and friends, dropping the boxed
    /// handle releases the resource. Implementations that need ordered
    /// shutdown (flush a wrapper, return a pooled connection) override it.
    fn close(&mut self) {}
}

impl std::fmt::Debug for dyn Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Handle")
    }
}

impl<T: Read + Seek> Handle for T {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        Read::read(self, buf)
    }

    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        Seek::seek(self, pos)
    }

    fn tell(&mut self) -> std::io::Result<u64> {
        self.stream_position()
    }
}

/// Open a file on disk as a boxed handle.
///
/// # Errors
///
/// Returns [`StreamError::Open`] with the offending path when the file
/// cannot be opened.
pub fn open_file(path: impl AsRef<Path>) -> Result<Box<dyn Handle>, StreamError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| StreamError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(file))
}

/// Wrap an in-memory byte buffer as a boxed handle.
#[must_use]
pub fn from_bytes(bytes: Vec<u8>) -> Box<dyn Handle> {
    Box::new(Cursor::new(bytes))
}
