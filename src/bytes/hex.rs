//! Hexadecimal rendering.

use std::fmt::Write;

/// Format bytes as uppercase hex, inserting `spacing` between bytes.
///
/// ```
/// use wirelog::bytes::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0x00, 0xAB, 0x7f], " "), "00 AB 7F");
/// assert_eq!(bytes_to_hex(&[0xde, 0xad], ""), "DEAD");
/// ```
pub fn bytes_to_hex(bytes: &[u8], spacing: &str) -> String {
    let mut out = String::with_capacity(bytes.len() * (2 + spacing.len()));
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(spacing);
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{:02X}", byte);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(bytes_to_hex(&[], ":"), "");
    }

    #[test]
    fn test_single_byte_has_no_separator() {
        assert_eq!(bytes_to_hex(&[0x0f], ", "), "0F");
    }

    #[test]
    fn test_multi_char_spacing() {
        assert_eq!(bytes_to_hex(&[0x01, 0x02, 0xff], " | "), "01 | 02 | FF");
    }

    #[test]
    fn test_matches_hex_crate_without_spacing() {
        let data = [0x12, 0x34, 0xab, 0xcd];
        assert_eq!(bytes_to_hex(&data, ""), ::hex::encode_upper(data));
    }
}
