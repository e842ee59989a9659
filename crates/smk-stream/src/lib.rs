#![warn(clippy::pedantic)]

pub mod error;
pub mod handle;
pub mod stream;

pub use error::StreamError;
pub use handle::{Handle, from_bytes, open_file};
pub use stream::ByteStream;
