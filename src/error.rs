use thiserror::Error;

/// Errors produced while assembling or extracting archives.
///
/// Format violations are never transient: none of these are worth
/// retrying, and extraction stops at the first one rather than
/// returning a partial entry list.
#[derive(Debug, Error)]
pub enum ZipError {
    /// An entry declares a compression method other than STORED.
    #[error("unsupported compression method {0} (only STORED/uncompressed is supported)")]
    UnsupportedCompression(u16),

    /// A header's declared lengths are inconsistent with the bytes available.
    #[error("corrupt archive: {0}")]
    CorruptArchive(String),

    /// An entry's name or data is too large for the fixed-width header fields.
    #[error("entry {name:?} exceeds ZIP field limits: {reason}")]
    FieldOverflow {
        name: String,
        reason: &'static str,
    },

    /// The archive as a whole exceeds what a non-ZIP64 layout can describe.
    #[error("archive exceeds non-ZIP64 limits: {0}")]
    ArchiveLimit(&'static str),

    /// Header read failed. Only reachable through truncated cursor reads.
    #[error("archive read failed")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ZipError> = std::result::Result<T, E>;
