// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Read cursor over a borrowed byte buffer.
//!
//! Every read is bounds-checked. A read that fails leaves the offset where the
//! last successful sub-read put it.
use bytepack_util::bytes_to_hex;

use crate::error::DecodeError;
use crate::prefix::{decode_payload, payload_len};
use crate::text::TextEncoding;
use crate::traits::Decode;

#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    offset: usize,
    start: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_offset(buf, 0)
    }

    /// Reads the region of `buf` beginning at `start`.
    pub fn with_offset(buf: &'a [u8], start: usize) -> Self {
        Self {
            buf,
            offset: start,
            start,
        }
    }

    #[cold]
    fn out_of_bounds(&self, requested: usize) -> DecodeError {
        let remaining = self.remaining();
        tracing::debug!(offset = self.offset, requested, remaining, "decode out of bounds");

        DecodeError::OutOfBounds {
            requested,
            remaining,
        }
    }

    /// The next `len` bytes, without advancing.
    #[inline(always)]
    fn peek(&self, len: usize) -> Result<&'a [u8], DecodeError> {
        self.offset
            .checked_add(len)
            .and_then(|end| self.buf.get(self.offset..end))
            .ok_or_else(|| self.out_of_bounds(len))
    }

    /// Borrows the next `len` bytes and advances past them.
    pub fn read(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let bytes = self.peek(len)?;
        self.offset += len;

        Ok(bytes)
    }

    /// Fills `dst` from the buffer and advances past the copied bytes.
    pub fn read_into(&mut self, dst: &mut [u8]) -> Result<&mut Self, DecodeError> {
        dst.copy_from_slice(self.read(dst.len())?);
        Ok(self)
    }

    /// Everything from the offset to the end of the buffer. Does not advance.
    pub fn rest(&self) -> &'a [u8] {
        self.buf.get(self.offset..).unwrap_or_default()
    }

    pub fn skip(&mut self, len: usize) -> Result<&mut Self, DecodeError> {
        self.read(len)?;
        Ok(self)
    }

    /// Reads a length-prefixed byte string.
    pub fn bytes(&mut self) -> Result<&'a [u8], DecodeError> {
        let len = self.prefix()?;
        self.read(len)
    }

    /// Reads a byte string of externally known length.
    pub fn fixed_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        self.read(len)
    }

    /// Reads one byte that must be `0` or `1`.
    ///
    /// The byte is consumed even when it is rejected.
    pub fn bool(&mut self) -> Result<bool, DecodeError> {
        match self.flag()? {
            0 => Ok(false),
            1 => Ok(true),
            byte => {
                tracing::debug!(offset = self.offset - 1, byte, "invalid bool");
                Err(DecodeError::InvalidBool(byte))
            }
        }
    }

    /// Reads one raw byte.
    pub fn flag(&mut self) -> Result<u8, DecodeError> {
        let [byte] = self.peek(1)? else {
            return Err(self.out_of_bounds(1));
        };
        self.offset += 1;

        Ok(*byte)
    }

    /// Reads a length or count tag.
    ///
    /// A truncated multi-byte tag is rejected as a whole, leaving the offset
    /// on its marker byte.
    pub fn prefix(&mut self) -> Result<usize, DecodeError> {
        let [marker] = self.peek(1)? else {
            return Err(self.out_of_bounds(1));
        };
        let len = 1 + payload_len(*marker);
        let raw = self.peek(len)?;
        self.offset += len;

        Ok(decode_payload(*marker, &raw[1..]))
    }

    /// Reads a length-prefixed byte string as lowercase hex text.
    pub fn hex(&mut self) -> Result<String, DecodeError> {
        self.bytes().map(bytes_to_hex)
    }

    /// Reads `len` bytes as lowercase hex text.
    pub fn fixed_hex(&mut self, len: usize) -> Result<String, DecodeError> {
        self.fixed_bytes(len).map(bytes_to_hex)
    }

    /// Reads text written by `Encoder::string` under the same encoding.
    pub fn string(&mut self, encoding: TextEncoding) -> Result<String, DecodeError> {
        let bytes = self.bytes()?;

        encoding.decode(bytes).inspect_err(|err| {
            tracing::debug!(offset = self.offset, %err, "invalid text");
        })
    }

    /// Reads an item count, then that many items through `decode_item`.
    pub fn array<T, E, F>(&mut self, mut decode_item: F) -> Result<Vec<T>, E>
    where
        E: From<DecodeError>,
        F: FnMut(&mut Self) -> Result<T, E>,
    {
        let count = self.prefix()?;

        // A hostile count must not drive the allocation.
        let mut items = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            items.push(decode_item(self)?);
        }

        Ok(items)
    }

    /// Reads an item count, then that many items through their [`Decode`] impl.
    pub fn array_of<T: Decode>(&mut self) -> Result<Vec<T>, DecodeError> {
        self.array(T::decode)
    }

    pub fn value<T: Decode>(&mut self) -> Result<T, DecodeError> {
        T::decode(self)
    }

    /// Absolute read position in the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Bytes consumed since `start`.
    pub fn bytes_read(&self) -> usize {
        self.offset - self.start
    }

    /// Closes the cursor, returning the total bytes consumed.
    pub fn finish(self) -> usize {
        self.bytes_read()
    }
}
