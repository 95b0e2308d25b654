// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Record impls for common value and wrapper types.

use alloc::boxed::Box;

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::text::TextEncoding;
use crate::traits::{Decode, Encode, EncodeBuffer};

// ═══════════════════════════════════════════════════════════════════════════════
// bool
// ═══════════════════════════════════════════════════════════════════════════════

impl Encode for bool {
    #[inline(always)]
    fn encode<B: EncodeBuffer>(&self, enc: &mut Encoder<B>) -> Result<(), EncodeError> {
        enc.bool(*self).map(|_| ())
    }
}

impl Decode for bool {
    #[inline(always)]
    fn decode(dec: &mut Decoder<'_>) -> Result<Self, DecodeError> {
        dec.bool()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Byte strings
// ═══════════════════════════════════════════════════════════════════════════════

impl Encode for [u8] {
    #[inline(always)]
    fn encode<B: EncodeBuffer>(&self, enc: &mut Encoder<B>) -> Result<(), EncodeError> {
        enc.bytes(self).map(|_| ())
    }
}

impl Encode for Vec<u8> {
    #[inline(always)]
    fn encode<B: EncodeBuffer>(&self, enc: &mut Encoder<B>) -> Result<(), EncodeError> {
        enc.bytes(self).map(|_| ())
    }
}

impl Decode for Vec<u8> {
    #[inline(always)]
    fn decode(dec: &mut Decoder<'_>) -> Result<Self, DecodeError> {
        dec.bytes().map(<[u8]>::to_vec)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Text (UTF-8)
// ═══════════════════════════════════════════════════════════════════════════════

impl Encode for str {
    #[inline(always)]
    fn encode<B: EncodeBuffer>(&self, enc: &mut Encoder<B>) -> Result<(), EncodeError> {
        enc.string(self, TextEncoding::Utf8).map(|_| ())
    }
}

impl Encode for String {
    #[inline(always)]
    fn encode<B: EncodeBuffer>(&self, enc: &mut Encoder<B>) -> Result<(), EncodeError> {
        self.as_str().encode(enc)
    }
}

impl Decode for String {
    #[inline(always)]
    fn decode(dec: &mut Decoder<'_>) -> Result<Self, DecodeError> {
        dec.string(TextEncoding::Utf8)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Option<T>: presence flag, then the value
// ═══════════════════════════════════════════════════════════════════════════════

impl<T> Encode for Option<T>
where
    T: Encode,
{
    fn encode<B: EncodeBuffer>(&self, enc: &mut Encoder<B>) -> Result<(), EncodeError> {
        enc.bool(self.is_some())?;

        match self {
            Some(value) => value.encode(enc),
            None => Ok(()),
        }
    }
}

impl<T> Decode for Option<T>
where
    T: Decode,
{
    fn decode(dec: &mut Decoder<'_>) -> Result<Self, DecodeError> {
        if dec.bool()? {
            T::decode(dec).map(Some)
        } else {
            Ok(None)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Box<T> and references
// ═══════════════════════════════════════════════════════════════════════════════

impl<T> Encode for Box<T>
where
    T: Encode + ?Sized,
{
    #[inline(always)]
    fn encode<B: EncodeBuffer>(&self, enc: &mut Encoder<B>) -> Result<(), EncodeError> {
        (**self).encode(enc)
    }
}

impl<T> Decode for Box<T>
where
    T: Decode,
{
    #[inline(always)]
    fn decode(dec: &mut Decoder<'_>) -> Result<Self, DecodeError> {
        T::decode(dec).map(Box::new)
    }
}

impl<T> Encode for &T
where
    T: Encode + ?Sized,
{
    #[inline(always)]
    fn encode<B: EncodeBuffer>(&self, enc: &mut Encoder<B>) -> Result<(), EncodeError> {
        (**self).encode(enc)
    }
}
