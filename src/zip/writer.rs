//! Store-only ZIP archive assembly.
//!
//! The writer emits the three sections of a ZIP archive in order: the
//! local section (one Local File Header plus raw data per entry), the
//! Central Directory (one header per entry, carrying each entry's byte
//! offset into the local section), and the End of Central Directory
//! record. No compression is attempted, so compressed and uncompressed
//! sizes are always equal.

use super::crc32;
use super::structures::{
    CDFH_SIGNATURE, DosDateTime, EOCD_SIGNATURE, Entry, LFH_SIGNATURE, MAX_DATA_LEN, MAX_ENTRIES,
    MAX_NAME_LEN, VERSION_NEEDED,
};
use crate::error::{Result, ZipError};

/// Store-only ZIP archive writer.
///
/// Holds the timestamp stamped into every entry's header fields. A
/// fresh writer uses the DOS epoch; callers that care about recorded
/// times supply their own via [`with_timestamp`](Self::with_timestamp).
#[derive(Debug, Default)]
pub struct ZipWriter {
    timestamp: DosDateTime,
}

impl ZipWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timestamp(timestamp: DosDateTime) -> Self {
        Self { timestamp }
    }

    /// Serialize `entries` into a complete archive buffer.
    ///
    /// Entries appear in the archive in input order. Fails with
    /// [`ZipError::FieldOverflow`] when an entry's name or data does not
    /// fit the 16/32-bit header fields, and [`ZipError::ArchiveLimit`]
    /// when the archive as a whole outgrows the non-ZIP64 layout.
    pub fn write(&self, entries: &[Entry]) -> Result<Vec<u8>> {
        if entries.len() > MAX_ENTRIES {
            return Err(ZipError::ArchiveLimit(
                "more than 65535 entries requires ZIP64",
            ));
        }

        // Local section: header + data per entry, offsets recorded
        // before each append so the central directory can point back.
        let mut local = Vec::new();
        let mut records = Vec::with_capacity(entries.len());

        for entry in entries {
            check_field_limits(entry)?;
            let crc = crc32::checksum(&entry.data);
            records.push((entry, crc, local.len()));
            self.append_local_header(&mut local, entry, crc);
            local.extend_from_slice(&entry.data);
        }

        if local.len() > MAX_DATA_LEN {
            return Err(ZipError::ArchiveLimit(
                "local section exceeds 4 GiB, requires ZIP64",
            ));
        }
        let cd_offset = local.len() as u32;

        let mut directory = Vec::new();
        for &(entry, crc, offset) in &records {
            self.append_central_header(&mut directory, entry, crc, offset as u32);
        }

        if directory.len() > MAX_DATA_LEN {
            return Err(ZipError::ArchiveLimit(
                "central directory exceeds 4 GiB, requires ZIP64",
            ));
        }
        let cd_size = directory.len() as u32;

        let mut archive = local;
        archive.append(&mut directory);
        append_eocd(&mut archive, entries.len() as u16, cd_size, cd_offset);

        Ok(archive)
    }

    /// Convenience for text payloads: UTF-8-encode each `(name, text)`
    /// pair and write them as regular byte entries.
    pub fn write_from_text_entries(&self, entries: &[(&str, &str)]) -> Result<Vec<u8>> {
        let entries: Vec<Entry> = entries
            .iter()
            .map(|(name, text)| Entry::new(*name, text.as_bytes()))
            .collect();
        self.write(&entries)
    }

    fn append_local_header(&self, buf: &mut Vec<u8>, entry: &Entry, crc: u32) {
        let name = entry.name.as_bytes();
        let size = entry.data.len() as u32;

        buf.extend_from_slice(LFH_SIGNATURE);
        put_u16(buf, VERSION_NEEDED);
        put_u16(buf, 0); // general purpose flags
        put_u16(buf, 0); // method: STORED
        put_u16(buf, self.timestamp.time);
        put_u16(buf, self.timestamp.date);
        put_u32(buf, crc);
        put_u32(buf, size); // compressed size == uncompressed (STORED)
        put_u32(buf, size);
        put_u16(buf, name.len() as u16);
        put_u16(buf, 0); // extra field length
        buf.extend_from_slice(name);
    }

    fn append_central_header(&self, buf: &mut Vec<u8>, entry: &Entry, crc: u32, offset: u32) {
        let name = entry.name.as_bytes();
        let size = entry.data.len() as u32;

        buf.extend_from_slice(CDFH_SIGNATURE);
        put_u16(buf, VERSION_NEEDED); // version made by
        put_u16(buf, VERSION_NEEDED); // version needed
        put_u16(buf, 0); // general purpose flags
        put_u16(buf, 0); // method: STORED
        put_u16(buf, self.timestamp.time);
        put_u16(buf, self.timestamp.date);
        put_u32(buf, crc);
        put_u32(buf, size);
        put_u32(buf, size);
        put_u16(buf, name.len() as u16);
        put_u16(buf, 0); // extra field length
        put_u16(buf, 0); // comment length
        put_u16(buf, 0); // disk number start
        put_u16(buf, 0); // internal attributes
        put_u32(buf, 0); // external attributes
        put_u32(buf, offset);
        buf.extend_from_slice(name);
    }
}

fn check_field_limits(entry: &Entry) -> Result<()> {
    if entry.name.len() > MAX_NAME_LEN {
        return Err(ZipError::FieldOverflow {
            name: truncate_for_display(&entry.name),
            reason: "encoded name longer than 65535 bytes",
        });
    }
    if entry.data.len() > MAX_DATA_LEN {
        return Err(ZipError::FieldOverflow {
            name: entry.name.clone(),
            reason: "data larger than 4 GiB requires ZIP64",
        });
    }
    Ok(())
}

fn append_eocd(buf: &mut Vec<u8>, entries: u16, cd_size: u32, cd_offset: u32) {
    buf.extend_from_slice(EOCD_SIGNATURE);
    put_u16(buf, 0); // this disk
    put_u16(buf, 0); // disk with central directory
    put_u16(buf, entries); // entries on this disk
    put_u16(buf, entries); // total entries
    put_u32(buf, cd_size);
    put_u32(buf, cd_offset);
    put_u16(buf, 0); // comment length
}

fn put_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn put_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Oversized names would make the error itself unwieldy.
fn truncate_for_display(name: &str) -> String {
    let mut end = 64.min(name.len());
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    name[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zip::structures::{EOCD_SIZE, LFH_SIZE};

    #[test]
    fn empty_archive_is_bare_eocd() {
        let archive = ZipWriter::new().write(&[]).unwrap();
        assert_eq!(archive.len(), EOCD_SIZE);
        assert_eq!(&archive[0..4], EOCD_SIGNATURE);
        // Both entry-count fields are zero.
        assert_eq!(&archive[8..12], &[0, 0, 0, 0]);
        // Central directory is empty and starts at offset 0.
        assert_eq!(&archive[12..20], &[0; 8]);
    }

    #[test]
    fn single_entry_field_layout() {
        let entries = [Entry::new("a.txt", b"hi".to_vec())];
        let archive = ZipWriter::new().write(&entries).unwrap();

        // Local file header at offset 0.
        assert_eq!(&archive[0..4], LFH_SIGNATURE);
        assert_eq!(&archive[4..6], &20u16.to_le_bytes()); // version needed
        assert_eq!(&archive[6..8], &[0, 0]); // flags
        assert_eq!(&archive[8..10], &[0, 0]); // method: STORED
        assert_eq!(&archive[14..18], &crc32::checksum(b"hi").to_le_bytes());
        assert_eq!(&archive[18..22], &2u32.to_le_bytes()); // compressed size
        assert_eq!(&archive[22..26], &2u32.to_le_bytes()); // uncompressed size
        assert_eq!(&archive[26..28], &5u16.to_le_bytes()); // name length
        assert_eq!(&archive[28..30], &[0, 0]); // extra length
        assert_eq!(&archive[30..35], b"a.txt");
        assert_eq!(&archive[35..37], b"hi");

        // Central directory follows the data immediately.
        let cd_offset = LFH_SIZE + 5 + 2;
        assert_eq!(&archive[cd_offset..cd_offset + 4], CDFH_SIGNATURE);
        // Its recorded local-header offset points back to 0.
        assert_eq!(
            &archive[cd_offset + 42..cd_offset + 46],
            &0u32.to_le_bytes()
        );

        // EOCD bookkeeping at the tail.
        let eocd = archive.len() - EOCD_SIZE;
        assert_eq!(&archive[eocd..eocd + 4], EOCD_SIGNATURE);
        assert_eq!(&archive[eocd + 10..eocd + 12], &1u16.to_le_bytes());
        assert_eq!(
            &archive[eocd + 16..eocd + 20],
            &(cd_offset as u32).to_le_bytes()
        );
    }

    #[test]
    fn oversized_name_is_rejected() {
        let entries = [Entry::new("n".repeat(70_000), Vec::new())];
        let err = ZipWriter::new().write(&entries).unwrap_err();
        assert!(matches!(err, ZipError::FieldOverflow { .. }));
    }

    #[test]
    fn timestamp_lands_in_both_headers() {
        let ts = DosDateTime::from_parts(2024, 6, 15, 13, 45, 58);
        let entries = [Entry::new("t", Vec::new())];
        let archive = ZipWriter::with_timestamp(ts).write(&entries).unwrap();

        assert_eq!(&archive[10..12], &ts.time.to_le_bytes());
        assert_eq!(&archive[12..14], &ts.date.to_le_bytes());
        let cd = LFH_SIZE + 1;
        assert_eq!(&archive[cd + 12..cd + 14], &ts.time.to_le_bytes());
        assert_eq!(&archive[cd + 14..cd + 16], &ts.date.to_le_bytes());
    }

    #[test]
    fn text_entries_wrapper_matches_byte_core() {
        let writer = ZipWriter::new();
        let from_text = writer
            .write_from_text_entries(&[("note.txt", "hello")])
            .unwrap();
        let from_bytes = writer
            .write(&[Entry::new("note.txt", b"hello".to_vec())])
            .unwrap();
        assert_eq!(from_text, from_bytes);
    }
}
