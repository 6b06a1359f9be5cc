/// ZIP compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Stored,
    Unknown(u16),
}

impl CompressionMethod {
    pub fn from_u16(value: u16) -> Self {
        match value {
            0 => CompressionMethod::Stored,
            _ => CompressionMethod::Unknown(value),
        }
    }

    pub fn as_u16(&self) -> u16 {
        match self {
            CompressionMethod::Stored => 0,
            CompressionMethod::Unknown(v) => *v,
        }
    }
}

/// Local File Header (LFH) - 30 bytes fixed part
pub const LFH_SIGNATURE: &[u8] = b"PK\x03\x04";
pub const LFH_SIZE: usize = 30;

/// Central Directory File Header (CDFH) - 46 bytes fixed part
pub const CDFH_SIGNATURE: &[u8] = b"PK\x01\x02";
pub const CDFH_SIZE: usize = 46;

/// End of Central Directory (EOCD) - 22 bytes
pub const EOCD_SIGNATURE: &[u8] = b"PK\x05\x06";
pub const EOCD_SIZE: usize = 22;

/// Version needed to extract a STORED entry (2.0)
pub const VERSION_NEEDED: u16 = 20;

/// Capacity of the 16-bit filename-length field
pub const MAX_NAME_LEN: usize = u16::MAX as usize;

/// Capacity of the 32-bit size fields (no ZIP64 support)
pub const MAX_DATA_LEN: usize = u32::MAX as usize;

/// Maximum entry count a non-ZIP64 EOCD can record
pub const MAX_ENTRIES: usize = u16::MAX as usize;

/// A named file carried inside an archive.
///
/// `name` is the archive-internal path, UTF-8 encoded; `data` is the
/// uncompressed content. Both are owned copies, independent of whatever
/// buffer they were written to or extracted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub data: Vec<u8>,
}

impl Entry {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Directory entries end with '/'
    pub fn is_directory(&self) -> bool {
        self.name.ends_with('/')
    }
}

/// The packed 16-bit date and time fields ZIP inherits from MS-DOS.
///
/// 2-second time resolution, 1980 epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DosDateTime {
    pub date: u16,
    pub time: u16,
}

impl DosDateTime {
    /// Pack a calendar date and time.
    ///
    /// Years before 1980 clamp to the DOS epoch (the format cannot
    /// represent them); seconds round down to 2-second resolution.
    pub fn from_parts(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        let year = year.max(1980);
        let date = ((year - 1980) << 9) | ((month as u16) << 5) | day as u16;
        let time = ((hour as u16) << 11) | ((minute as u16) << 5) | (second as u16 / 2);
        Self { date, time }
    }

    /// Unpack the date field to (year, month, day)
    pub fn date_parts(&self) -> (u16, u8, u8) {
        let day = (self.date & 0x1F) as u8;
        let month = ((self.date >> 5) & 0x0F) as u8;
        let year = ((self.date >> 9) & 0x7F) + 1980;
        (year, month, day)
    }

    /// Unpack the time field to (hour, minute, second)
    pub fn time_parts(&self) -> (u8, u8, u8) {
        let second = ((self.time & 0x1F) * 2) as u8;
        let minute = ((self.time >> 5) & 0x3F) as u8;
        let hour = ((self.time >> 11) & 0x1F) as u8;
        (hour, minute, second)
    }
}

impl Default for DosDateTime {
    /// Midnight at the DOS epoch, 1980-01-01.
    fn default() -> Self {
        Self::from_parts(1980, 1, 1, 0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dos_datetime_round_trip() {
        let dt = DosDateTime::from_parts(2024, 6, 15, 13, 45, 58);
        assert_eq!(dt.date_parts(), (2024, 6, 15));
        assert_eq!(dt.time_parts(), (13, 45, 58));
    }

    #[test]
    fn seconds_round_down_to_two_second_resolution() {
        let dt = DosDateTime::from_parts(1999, 12, 31, 23, 59, 59);
        assert_eq!(dt.time_parts(), (23, 59, 58));
    }

    #[test]
    fn pre_epoch_years_clamp_to_1980() {
        let dt = DosDateTime::from_parts(1970, 1, 1, 0, 0, 0);
        assert_eq!(dt.date_parts(), (1980, 1, 1));
    }

    #[test]
    fn default_is_dos_epoch() {
        let dt = DosDateTime::default();
        assert_eq!(dt.date_parts(), (1980, 1, 1));
        assert_eq!(dt.time_parts(), (0, 0, 0));
    }

    #[test]
    fn compression_method_round_trip() {
        assert_eq!(CompressionMethod::from_u16(0), CompressionMethod::Stored);
        assert_eq!(
            CompressionMethod::from_u16(8),
            CompressionMethod::Unknown(8)
        );
        assert_eq!(CompressionMethod::Unknown(8).as_u16(), 8);
    }
}
