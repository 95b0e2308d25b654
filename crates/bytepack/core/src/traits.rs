// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::Range;

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{BufferError, DecodeError, EncodeError};

/// Backing storage of an [`Encoder`].
///
/// The whole capacity is addressable: `as_slice().len() == capacity()`.
pub trait EncodeBuffer {
    /// What `Encoder::finish` hands back to the caller.
    type Output;

    fn capacity(&self) -> usize;

    /// Makes at least `required` bytes addressable, preserving every byte
    /// already in the buffer.
    fn ensure_capacity(&mut self, required: usize) -> Result<(), BufferError>;

    fn as_slice(&self) -> &[u8];

    fn as_mut_slice(&mut self) -> &mut [u8];

    /// Narrows the buffer to `region`. Callers guarantee
    /// `region.start <= region.end <= capacity()`.
    fn into_region(self, region: Range<usize>) -> Self::Output;
}

/// Records that append themselves onto an [`Encoder`].
pub trait Encode {
    fn encode<B: EncodeBuffer>(&self, enc: &mut Encoder<B>) -> Result<(), EncodeError>;
}

/// Records that read themselves back from a [`Decoder`].
///
/// Must consume exactly the bytes the matching [`Encode`] impl produced.
pub trait Decode: Sized {
    fn decode(dec: &mut Decoder<'_>) -> Result<Self, DecodeError>;
}
