// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::prefix::PREFIX_MAX;

/// Values on either side of every prefix size class.
pub const PREFIX_BOUNDARIES: [usize; 8] = [
    0,
    0xfd,
    0xfe,
    0xff,
    0x100,
    0xffff,
    0x1_0000,
    PREFIX_MAX,
];

/// `count` prefix values spread evenly over `0..=PREFIX_MAX`, both ends included.
pub fn equidistant_prefixes(count: usize) -> Vec<usize> {
    match count {
        0 => Vec::new(),
        1 => vec![0],
        _ => {
            let step = PREFIX_MAX / (count - 1);
            (0..count - 1)
                .map(|i| i * step)
                .chain(core::iter::once(PREFIX_MAX))
                .collect()
        }
    }
}

/// `len` bytes cycling through every byte value, so misplaced copies show up.
pub fn patterned_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
