// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::borrow::Cow;

use bytepack_util::{hex_decoded_len, hex_to_bytes};

use crate::error::EncodeError;

/// Byte content handed to `Encoder::bytes`, either raw or as hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload<'a> {
    Raw(&'a [u8]),
    Hex(&'a str),
}

impl<'a> Payload<'a> {
    pub fn hex(text: &'a str) -> Self {
        Payload::Hex(text)
    }

    /// Number of bytes the payload puts on the wire, prefix excluded.
    pub fn decoded_len(&self) -> Result<usize, EncodeError> {
        match self {
            Payload::Raw(bytes) => Ok(bytes.len()),
            Payload::Hex(text) => Ok(hex_decoded_len(text)?),
        }
    }

    /// Resolves the payload to the bytes that go on the wire.
    ///
    /// Hex text is fully validated here, before the encoder touches its buffer.
    pub(crate) fn to_bytes(self) -> Result<Cow<'a, [u8]>, EncodeError> {
        match self {
            Payload::Raw(bytes) => Ok(Cow::Borrowed(bytes)),
            Payload::Hex(text) => Ok(Cow::Owned(hex_to_bytes(text)?)),
        }
    }
}

impl<'a> From<&'a [u8]> for Payload<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Payload::Raw(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Payload<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Payload::Raw(bytes.as_slice())
    }
}

impl<'a> From<&'a Vec<u8>> for Payload<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Payload::Raw(bytes.as_slice())
    }
}
