// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Encoder and decoder cursors for compact length-prefixed binary buffers.

extern crate alloc;

#[cfg(test)]
mod tests;

mod blankets;
mod decoder;
mod encode_buffer;
mod encoder;
mod error;
mod payload;
mod text;
mod traits;

pub mod prefix;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

pub use decoder::Decoder;
pub use encode_buffer::{
    DEFAULT_GROWTH_FACTOR, DEFAULT_INITIAL_CAPACITY, GrowableBuffer, GrowthPolicy,
};
pub use encoder::Encoder;
pub use error::{BufferError, DecodeError, EncodeError, UnknownEncoding};
pub use payload::Payload;
pub use prefix::{PREFIX_MAX, prefix_len};
pub use text::TextEncoding;
pub use traits::{Decode, Encode, EncodeBuffer};

pub use bytepack_util::HexError;
