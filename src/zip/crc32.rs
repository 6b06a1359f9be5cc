//! Table-driven CRC-32 (ISO-HDLC variant, as verified by standard ZIP tools).

use std::sync::OnceLock;

/// Reversed CRC-32 polynomial shared by ZIP, gzip and zlib.
const POLYNOMIAL: u32 = 0xEDB8_8320;

static TABLE: OnceLock<[u32; 256]> = OnceLock::new();

/// The 256-entry lookup table, built once per process and shared
/// read-only across all callers afterwards.
fn table() -> &'static [u32; 256] {
    TABLE.get_or_init(|| {
        let mut table = [0u32; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            let mut crc = i as u32;
            for _ in 0..8 {
                crc = if crc & 1 != 0 {
                    (crc >> 1) ^ POLYNOMIAL
                } else {
                    crc >> 1
                };
            }
            *slot = crc;
        }
        table
    })
}

/// Compute the CRC-32 checksum of `data`.
pub fn checksum(data: &[u8]) -> u32 {
    let table = table();
    let mut crc = 0xFFFF_FFFFu32;
    for &byte in data {
        crc = table[((crc ^ byte as u32) & 0xFF) as usize] ^ (crc >> 8);
    }
    crc ^ 0xFFFF_FFFF
}

#[cfg(test)]
mod tests {
    use super::checksum;

    #[test]
    fn standard_check_value() {
        // The check value every CRC-32/ISO-HDLC implementation must reproduce.
        assert_eq!(checksum(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(checksum(b""), 0);
    }

    #[test]
    fn single_byte() {
        assert_eq!(checksum(b"a"), 0xE8B7_BE43);
    }

    #[test]
    fn differs_on_byte_order() {
        assert_ne!(checksum(b"ab"), checksum(b"ba"));
    }
}
