/// Base32 encoding and decoding for Sandflake IDs
///
/// This module provides the fixed-length textual codec: 16 raw bytes map to
/// exactly 26 characters over a custom 32-symbol alphabet, and back. The
/// alphabet and its ordering are part of the wire format and must not change.
use once_cell::sync::Lazy;

use crate::error::SandflakeError;

/// Character set for the Sandflake base32 encoding.
///
/// Visually ambiguous characters (I, L, O, U) are deliberately excluded.
const BASE32_CHARS: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Length of the raw binary form in bytes
pub const RAW_LEN: usize = 16;

/// Length of the encoded textual form in characters
pub const ENCODED_LEN: usize = 26;

/// Lookup table for decoding base32 characters to their 5-bit values
///
/// Lowercase letters map to the same value as their uppercase form.
static DECODE_MAP: Lazy<[i8; 256]> = Lazy::new(|| {
    let mut map = [-1i8; 256];
    for (i, &c) in BASE32_CHARS.iter().enumerate() {
        map[c as usize] = i as i8;
        map[c.to_ascii_lowercase() as usize] = i as i8;
    }
    map
});

/// Encode 16 raw bytes into the fixed 26-character array form
///
/// The 128 input bits are consumed most-significant-bit first, 5 bits per
/// symbol. The trailing 3 bits land in the final symbol with two zero bits
/// appended at the low end, so the output length is always exactly 26.
///
/// # Arguments
/// * `bytes` - The 16-byte raw ID to encode
///
/// # Returns
/// * `[u8; ENCODED_LEN]` - The encoded ASCII bytes
pub fn encode_array(bytes: &[u8; RAW_LEN]) -> [u8; ENCODED_LEN] {
    let value = u128::from_be_bytes(*bytes);
    let mut buffer = [0u8; ENCODED_LEN];

    for (i, out) in buffer.iter_mut().take(ENCODED_LEN - 1).enumerate() {
        let shift = 123 - 5 * i;
        *out = BASE32_CHARS[((value >> shift) & 0x1F) as usize];
    }
    // Final partial group: 3 remaining bits, zero-filled at the low end
    buffer[ENCODED_LEN - 1] = BASE32_CHARS[((value & 0x07) << 2) as usize];

    buffer
}

/// Encode 16 raw bytes into the fixed 26-character string form
///
/// # Arguments
/// * `bytes` - The 16-byte raw ID to encode
///
/// # Returns
/// * `String` - The canonical uppercase encoded string
pub fn encode(bytes: &[u8; RAW_LEN]) -> String {
    String::from_utf8_lossy(&encode_array(bytes)).into_owned()
}

/// Decode a 26-character string back into 16 raw bytes
///
/// Decoding is the exact left inverse of [`encode`]: the two padding bits of
/// the final symbol are discarded. Lowercase input is accepted; the canonical
/// form is uppercase.
///
/// # Arguments
/// * `encoded` - The 26-character encoded string
///
/// # Returns
/// * `Result<[u8; RAW_LEN], SandflakeError>` - The raw bytes or an error
pub fn decode(encoded: &str) -> Result<[u8; RAW_LEN], SandflakeError> {
    let input = encoded.as_bytes();
    if input.len() != ENCODED_LEN {
        return Err(SandflakeError::InvalidLength {
            expected: ENCODED_LEN,
            actual: input.len(),
        });
    }

    let mut value: u128 = 0;
    for &c in &input[..ENCODED_LEN - 1] {
        let bits = DECODE_MAP[c as usize];
        if bits == -1 {
            return Err(SandflakeError::InvalidCharacter(c as char));
        }
        value = (value << 5) | bits as u128;
    }

    let last = input[ENCODED_LEN - 1];
    let bits = DECODE_MAP[last as usize];
    if bits == -1 {
        return Err(SandflakeError::InvalidCharacter(last as char));
    }
    // Only the high 3 bits of the final symbol carry data
    value = (value << 3) | (bits >> 2) as u128;

    Ok(value.to_be_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAGIC_VALUE: &str = "05E4ECYW2GZ66B8AFZZZZMKFPR";
    const MAGIC_BYTES: [u8; 16] = [
        1, 92, 71, 51, 220, 20, 62, 99, 45, 10, 127, 255, 255, 210, 111, 182,
    ];

    #[test]
    fn test_encode_magic_value() {
        assert_eq!(encode(&MAGIC_BYTES), MAGIC_VALUE);
    }

    #[test]
    fn test_decode_magic_value() {
        assert_eq!(decode(MAGIC_VALUE).unwrap(), MAGIC_BYTES);
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let test_cases: [[u8; 16]; 5] = [
            [0; 16],
            [0xFF; 16],
            MAGIC_BYTES,
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
            [0x80, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        ];

        for bytes in &test_cases {
            let encoded = encode(bytes);
            assert_eq!(encoded.len(), ENCODED_LEN);
            let decoded = decode(&encoded).unwrap();
            assert_eq!(&decoded, bytes, "Failed roundtrip for {:?}", bytes);
        }
    }

    #[test]
    fn test_string_roundtrip() {
        let encoded = encode(&MAGIC_BYTES);
        assert_eq!(encode(&decode(&encoded).unwrap()), encoded);
    }

    #[test]
    fn test_decode_lowercase() {
        let lowered = MAGIC_VALUE.to_lowercase();
        assert_eq!(decode(&lowered).unwrap(), MAGIC_BYTES);
    }

    #[test]
    fn test_decode_length_errors() {
        assert_eq!(
            decode(&MAGIC_VALUE[..25]),
            Err(SandflakeError::InvalidLength {
                expected: 26,
                actual: 25,
            })
        );

        let long = format!("{}0", MAGIC_VALUE);
        assert_eq!(
            decode(&long),
            Err(SandflakeError::InvalidLength {
                expected: 26,
                actual: 27,
            })
        );

        assert_eq!(
            decode(""),
            Err(SandflakeError::InvalidLength {
                expected: 26,
                actual: 0,
            })
        );
    }

    #[test]
    fn test_decode_invalid_characters() {
        // I, L, O and U are not in the alphabet
        for c in ['I', 'L', 'O', 'U', '!', '='] {
            let bad = format!("{}{}", c, &MAGIC_VALUE[1..]);
            assert_eq!(decode(&bad), Err(SandflakeError::InvalidCharacter(c)));
        }
    }

    #[test]
    fn test_alphabet_ordering_is_wire_format() {
        // Any index shift changes every encoded ID, so pin the exact table.
        assert_eq!(BASE32_CHARS, b"0123456789ABCDEFGHJKMNPQRSTVWXYZ");
        assert_eq!(encode(&[0; 16]), "00000000000000000000000000");
        assert_eq!(encode(&[0xFF; 16]), "ZZZZZZZZZZZZZZZZZZZZZZZZZW");
    }
}
