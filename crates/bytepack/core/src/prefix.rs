// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Variable-length prefix tagging lengths and counts.
//!
//! | value                    | bytes                                |
//! |--------------------------|--------------------------------------|
//! | `n < 0xfe`               | `n`                                  |
//! | `0xfe <= n <= 0xffff`    | `0xfe`, then `n` as little-endian u16 |
//! | `0xffff < n < 0xffffffff`| `0xff`, then `n` as little-endian u32 |
//!
//! Values from `0xffffffff` upwards cannot be encoded.

use crate::error::EncodeError;

/// Marker introducing a two byte payload.
pub const MARKER_U16: u8 = 0xfe;

/// Marker introducing a four byte payload.
pub const MARKER_U32: u8 = 0xff;

/// Largest encodable prefix value.
pub const PREFIX_MAX: usize = 0xffff_fffe;

/// Longest encoded prefix.
pub const PREFIX_MAX_LEN: usize = 5;

/// Number of bytes `value` occupies once encoded.
#[inline(always)]
pub fn prefix_len(value: usize) -> Result<usize, EncodeError> {
    if value < MARKER_U16 as usize {
        Ok(1)
    } else if value <= 0xffff {
        Ok(3)
    } else if value <= PREFIX_MAX {
        Ok(5)
    } else {
        Err(EncodeError::PrefixOutOfRange(value))
    }
}

/// Encodes `value` into `scratch`, returning how many leading bytes were used.
///
/// `scratch` is left untouched on error.
#[inline(always)]
pub fn encode_prefix(value: usize, scratch: &mut [u8; PREFIX_MAX_LEN]) -> Result<usize, EncodeError> {
    let len = prefix_len(value)?;

    match len {
        1 => scratch[0] = value as u8,
        3 => {
            scratch[0] = MARKER_U16;
            scratch[1..3].copy_from_slice(&(value as u16).to_le_bytes());
        }
        _ => {
            scratch[0] = MARKER_U32;
            scratch[1..5].copy_from_slice(&(value as u32).to_le_bytes());
        }
    }

    Ok(len)
}

/// Length of the payload following `marker`, not counting the marker itself.
#[inline(always)]
pub(crate) fn payload_len(marker: u8) -> usize {
    match marker {
        MARKER_U16 => 2,
        MARKER_U32 => 4,
        _ => 0,
    }
}

/// Reassembles a prefix from its marker and little-endian payload.
///
/// `payload` must hold exactly `payload_len(marker)` bytes.
#[inline(always)]
pub(crate) fn decode_payload(marker: u8, payload: &[u8]) -> usize {
    match marker {
        MARKER_U16 | MARKER_U32 => payload
            .iter()
            .rev()
            .fold(0usize, |acc, &byte| (acc << 8) | byte as usize),
        _ => marker as usize,
    }
}
