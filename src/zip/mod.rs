//! Store-only ZIP archive reading and writing.
//!
//! ## Archive layout
//!
//! An archive is three sections back to back:
//! 1. Local file headers, each followed by that entry's raw data
//! 2. Central Directory with one header per entry
//! 3. End of Central Directory (EOCD) record
//!
//! This module produces and consumes only the uncompressed STORED
//! method (method 0), with UTF-8 names and little-endian fields, and no
//! ZIP64, multi-disk, or encryption support. The writer's output is
//! readable by standard ZIP tools; the reader accepts archives from any
//! store-only producer that lays entries out contiguously.

pub mod crc32;
mod reader;
mod structures;
mod writer;

pub use reader::ZipReader;
pub use structures::*;
pub use writer::ZipWriter;
