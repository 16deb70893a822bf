//! Header/body split for secretstream payloads.

use crate::error::SplitError;

/// Length of an XChaCha20-Poly1305 secretstream header.
pub const SECRETSTREAM_HEADER_LEN: usize = 24;

/// Split `buf` into the secretstream header and the remaining ciphertext.
pub fn split_header(buf: &[u8]) -> Result<(&[u8], &[u8]), SplitError> {
    split_at_header(buf, SECRETSTREAM_HEADER_LEN)
}

/// Split `buf` after the first `header_len` bytes.
///
/// A buffer exactly `header_len` long yields an empty right half.
pub fn split_at_header(buf: &[u8], header_len: usize) -> Result<(&[u8], &[u8]), SplitError> {
    if buf.len() < header_len {
        return Err(SplitError::TooShort {
            len: buf.len(),
            header_len,
        });
    }
    Ok(buf.split_at(header_len))
}
