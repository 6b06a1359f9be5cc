//! # zipstore
//!
//! A store-only ZIP archive codec over in-memory buffers.
//!
//! This library packages named byte buffers into a spec-compliant,
//! uncompressed ("store" method) ZIP archive and parses such archives
//! back. A companion Base64 codec moves archive bytes through
//! JSON/text-only channels, and a table-driven CRC32 engine fills the
//! format's integrity fields.
//!
//! ## Features
//!
//! - Write an ordered list of named entries to a single archive buffer
//! - Read a store-only archive back into entries, in written order
//! - Base64 encode/decode for text transport of archive bytes
//! - Typed errors for unsupported compression, corruption, and
//!   field-capacity overflow
//!
//! ## Example
//!
//! ```
//! use zipstore::{base64, Entry, ZipReader, ZipWriter};
//!
//! fn main() -> zipstore::Result<()> {
//!     let entries = vec![Entry::new("hello.txt", b"hi".to_vec())];
//!
//!     // Pack, then make the bytes text-transportable.
//!     let archive = ZipWriter::new().write(&entries)?;
//!     let text = base64::encode(&archive);
//!
//!     // Later: back to bytes, back to entries.
//!     let bytes = base64::decode(&text);
//!     let unpacked = ZipReader::new(&bytes).extract()?;
//!     assert_eq!(unpacked, entries);
//!     Ok(())
//! }
//! ```

pub mod base64;
pub mod cli;
pub mod error;
pub mod zip;

pub use cli::Cli;
pub use error::{Result, ZipError};
pub use zip::{CompressionMethod, DosDateTime, Entry, ZipReader, ZipWriter};
