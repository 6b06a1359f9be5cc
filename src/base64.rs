//! Base64 codec for moving archive bytes through text-only channels.
//!
//! Standard alphabet (`A–Z a–z 0–9 + /`) with `=` padding. Decoding is
//! lenient: characters outside the alphabet are skipped rather than
//! rejected, so text that picked up line breaks or JSON escaping on the
//! way through a transport still decodes. Decoding stops at the first
//! `=`, which always marks the end of payload in well-formed input.

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Encode `data` as Base64 text.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len().div_ceil(3) * 4);

    for chunk in data.chunks(3) {
        let b0 = chunk[0] as u32;
        let b1 = chunk.get(1).copied().unwrap_or(0) as u32;
        let b2 = chunk.get(2).copied().unwrap_or(0) as u32;
        let group = (b0 << 16) | (b1 << 8) | b2;

        out.push(ALPHABET[(group >> 18) as usize & 0x3F] as char);
        out.push(ALPHABET[(group >> 12) as usize & 0x3F] as char);
        out.push(if chunk.len() > 1 {
            ALPHABET[(group >> 6) as usize & 0x3F] as char
        } else {
            '='
        });
        out.push(if chunk.len() > 2 {
            ALPHABET[group as usize & 0x3F] as char
        } else {
            '='
        });
    }

    out
}

/// Decode Base64 `text` back into bytes.
///
/// Never fails: unknown characters are ignored and a trailing partial
/// group yields however many whole bytes it carries.
pub fn decode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() / 4 * 3);
    let mut group = 0u32;
    let mut have = 0u8;

    for &c in text.as_bytes() {
        if c == b'=' {
            break;
        }
        let Some(digit) = decode_digit(c) else {
            continue;
        };
        group = (group << 6) | digit as u32;
        have += 1;
        if have == 4 {
            out.push((group >> 16) as u8);
            out.push((group >> 8) as u8);
            out.push(group as u8);
            group = 0;
            have = 0;
        }
    }

    // A partial final group of 2 or 3 digits carries 1 or 2 payload bytes.
    // A single leftover digit carries no whole byte and is dropped.
    match have {
        2 => out.push((group >> 4) as u8),
        3 => {
            out.push((group >> 10) as u8);
            out.push((group >> 2) as u8);
        }
        _ => {}
    }

    out
}

fn decode_digit(c: u8) -> Option<u8> {
    match c {
        b'A'..=b'Z' => Some(c - b'A'),
        b'a'..=b'z' => Some(c - b'a' + 26),
        b'0'..=b'9' => Some(c - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{decode, encode};

    #[test]
    fn empty_input() {
        assert_eq!(encode(b""), "");
        assert_eq!(decode(""), Vec::<u8>::new());
    }

    #[test]
    fn padding_shapes() {
        assert_eq!(encode(&[0x00]), "AA==");
        assert_eq!(encode(b"M"), "TQ==");
        assert_eq!(encode(b"Ma"), "TWE=");
        assert_eq!(encode(b"Man"), "TWFu");
    }

    #[test]
    fn known_vector() {
        assert_eq!(encode(b"hello world"), "aGVsbG8gd29ybGQ=");
        assert_eq!(decode("aGVsbG8gd29ybGQ="), b"hello world");
    }

    #[test]
    fn round_trip_all_lengths_mod_three() {
        for len in 0..=9usize {
            let data: Vec<u8> = (0..len as u8).map(|b| b.wrapping_mul(37)).collect();
            assert_eq!(decode(&encode(&data)), data, "length {len}");
        }
    }

    #[test]
    fn round_trip_binary() {
        let data: Vec<u8> = (0..=255u8).collect();
        assert_eq!(decode(&encode(&data)), data);
    }

    #[test]
    fn lenient_decode_skips_foreign_characters() {
        assert_eq!(decode("aGVs\nbG8g\nd29y\nbGQ="), b"hello world");
        assert_eq!(decode("  TWFu  "), b"Man");
    }
}
