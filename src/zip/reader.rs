//! Sequential store-only ZIP reader.
//!
//! The reader walks Local File Headers forward from offset 0 and never
//! consults the central directory. That is sufficient for archives laid
//! out with no gaps between entries, as [`ZipWriter`](super::ZipWriter)
//! and other store-only producers emit them; a general-purpose reader
//! would instead locate the EOCD at the tail and follow its recorded
//! offsets. Known scope limitation, kept deliberately.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

use super::structures::{CompressionMethod, Entry, LFH_SIGNATURE, LFH_SIZE};
use crate::error::{Result, ZipError};

/// Store-only ZIP archive reader over an in-memory buffer.
pub struct ZipReader<'a> {
    archive: &'a [u8],
}

impl<'a> ZipReader<'a> {
    pub fn new(archive: &'a [u8]) -> Self {
        Self { archive }
    }

    /// Parse every entry out of the archive, in written order.
    ///
    /// Extraction walks local headers until the signature check fails
    /// (normally at the central directory) or the buffer ends. Any entry
    /// with a non-STORED method aborts with
    /// [`ZipError::UnsupportedCompression`]; declared lengths running
    /// past the buffer abort with [`ZipError::CorruptArchive`]. There is
    /// no partial result: the caller gets the whole entry list or the
    /// first error.
    pub fn extract(&self) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();
        let mut offset = 0usize;

        while offset + 4 <= self.archive.len() {
            if &self.archive[offset..offset + 4] != LFH_SIGNATURE {
                break;
            }
            let (entry, next) = self.read_entry(offset)?;
            entries.push(entry);
            offset = next;
        }

        Ok(entries)
    }

    /// Parse the entry whose Local File Header starts at `offset`.
    ///
    /// Returns the entry and the offset just past its data region.
    fn read_entry(&self, offset: usize) -> Result<(Entry, usize)> {
        if offset + LFH_SIZE > self.archive.len() {
            return Err(ZipError::CorruptArchive(format!(
                "truncated local file header at offset {offset}"
            )));
        }

        // Fixed fields after the 4-byte signature.
        let mut cursor = Cursor::new(&self.archive[offset + 4..offset + LFH_SIZE]);
        let _version_needed = cursor.read_u16::<LittleEndian>()?;
        let _flags = cursor.read_u16::<LittleEndian>()?;
        let method = cursor.read_u16::<LittleEndian>()?;
        let _last_mod_time = cursor.read_u16::<LittleEndian>()?;
        let _last_mod_date = cursor.read_u16::<LittleEndian>()?;
        let _crc32 = cursor.read_u32::<LittleEndian>()?;
        let compressed_size = cursor.read_u32::<LittleEndian>()? as usize;
        let _uncompressed_size = cursor.read_u32::<LittleEndian>()?;
        let name_len = cursor.read_u16::<LittleEndian>()? as usize;
        let extra_len = cursor.read_u16::<LittleEndian>()? as usize;

        if CompressionMethod::from_u16(method) != CompressionMethod::Stored {
            return Err(ZipError::UnsupportedCompression(method));
        }

        // Data sits after the header, the name, and any extra field
        // (skipped by declared length, never parsed).
        let name_start = offset + LFH_SIZE;
        let data_start = name_start + name_len + extra_len;
        let data_end = data_start + compressed_size;
        if data_end > self.archive.len() {
            return Err(ZipError::CorruptArchive(format!(
                "entry at offset {offset} declares {compressed_size} data bytes past end of archive"
            )));
        }

        // Use lossy conversion to handle non-UTF8 filenames gracefully
        let name = String::from_utf8_lossy(&self.archive[name_start..name_start + name_len])
            .to_string();
        let data = self.archive[data_start..data_end].to_vec();

        Ok((Entry { name, data }, data_end))
    }
}
