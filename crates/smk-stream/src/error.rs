use std::path::PathBuf;

/// Errors from the fallible edge of this crate: acquiring a handle.
///
/// [`ByteStream`](crate::ByteStream) itself never returns these: its
/// operations report through boolean flags and sentinel zero values, so a
/// parse loop can probe the stream without unwinding on every truncated
/// field. The place where an unusable backing resource actually surfaces
/// is handle construction, and that is what this enum covers.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The backing file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
}
