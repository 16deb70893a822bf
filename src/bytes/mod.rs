//! Byte-buffer helpers.
//!
//! # Responsibilities
//! - Render byte sequences as hexadecimal text for log lines
//! - Split encrypted payloads into header and ciphertext
//!
//! Both are stateless and allocation-light; neither logs.

pub mod hex;
pub mod split;

pub use self::hex::bytes_to_hex;
pub use split::{split_at_header, split_header, SECRETSTREAM_HEADER_LEN};
