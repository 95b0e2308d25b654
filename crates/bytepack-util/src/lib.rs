// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hex text helpers shared by the bytepack crates.

use thiserror::Error;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

#[derive(Debug, Error, Eq, PartialEq, Clone, Copy)]
pub enum HexError {
    #[error("OddLength: hex text has {0} digits")]
    OddLength(usize),

    #[error("InvalidDigit: byte {byte:#04x} at index {index}")]
    InvalidDigit { index: usize, byte: u8 },
}

#[inline(always)]
fn nibble(byte: u8, index: usize) -> Result<u8, HexError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(HexError::InvalidDigit { index, byte }),
    }
}

/// Returns the number of bytes `hex` decodes to, validating it on the way.
///
/// Nothing is allocated, so callers can size a buffer before decoding.
pub fn hex_decoded_len(hex: &str) -> Result<usize, HexError> {
    let digits = hex.as_bytes();

    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength(digits.len()));
    }

    for (index, &byte) in digits.iter().enumerate() {
        nibble(byte, index)?;
    }

    Ok(digits.len() / 2)
}

/// Parses a hexadecimal string into bytes.
///
/// The string must have an even number of characters and contain only
/// valid hexadecimal digits (0-9, a-f, A-F).
///
/// # Example
///
/// ```
/// use bytepack_util::hex_to_bytes;
///
/// let bytes = hex_to_bytes("deadbeef").unwrap();
/// assert_eq!(bytes, vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, HexError> {
    let digits = hex.as_bytes();

    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength(digits.len()));
    }

    digits
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            let high = nibble(pair[0], 2 * i)?;
            let low = nibble(pair[1], 2 * i + 1)?;
            Ok((high << 4) | low)
        })
        .collect()
}

/// Renders bytes as lowercase hexadecimal text.
///
/// ```
/// use bytepack_util::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);

    for &byte in bytes {
        hex.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        hex.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }

    hex
}
