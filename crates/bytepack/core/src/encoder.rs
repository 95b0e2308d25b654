// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Write cursor over an [`EncodeBuffer`].
//!
//! Every append either writes all of its bytes or none of them: the space a
//! call needs is reserved before the first byte lands.
use core::ops::Range;

use crate::encode_buffer::{GrowableBuffer, GrowthPolicy};
use crate::error::{BufferError, EncodeError};
use crate::payload::Payload;
use crate::prefix::{PREFIX_MAX_LEN, encode_prefix};
use crate::text::TextEncoding;
use crate::traits::{Encode, EncodeBuffer};

#[derive(Debug)]
pub struct Encoder<B: EncodeBuffer = GrowableBuffer> {
    buf: B,
    offset: usize,
    start: usize,
}

impl Default for Encoder<GrowableBuffer> {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder<GrowableBuffer> {
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_policy(GrowthPolicy {
            initial_capacity: capacity,
            ..GrowthPolicy::default()
        })
    }

    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            buf: GrowableBuffer::with_policy(policy),
            offset: 0,
            start: 0,
        }
    }

    /// Writes into `bytes` from `start` onwards, growing it as needed.
    ///
    /// The finished output only holds what this encoder wrote; bytes before
    /// `start` are dropped.
    pub fn from_vec(mut bytes: Vec<u8>, start: usize) -> Self {
        if bytes.len() < start {
            bytes.resize(start, 0);
        }

        Self {
            buf: GrowableBuffer::from_vec(bytes, GrowthPolicy::default()),
            offset: start,
            start,
        }
    }
}

impl<'a> Encoder<&'a mut [u8]> {
    /// Writes into the region of `buf` beginning at `start`. The slice never grows.
    pub fn from_slice(buf: &'a mut [u8], start: usize) -> Result<Self, EncodeError> {
        Self::with_buffer(buf, start)
    }
}

impl<B: EncodeBuffer> Encoder<B> {
    #[inline(always)]
    fn debug_assert_invariant(&self) {
        debug_assert!(
            (self.start <= self.offset) & (self.offset <= self.buf.capacity()),
            "Invariant violated: start ({}) <= offset ({}) <= capacity ({})",
            self.start,
            self.offset,
            self.buf.capacity()
        );
    }

    /// Wraps any buffer backend, writing from `start`.
    pub fn with_buffer(mut buf: B, start: usize) -> Result<Self, EncodeError> {
        buf.ensure_capacity(start)?;

        Ok(Self {
            buf,
            offset: start,
            start,
        })
    }

    /// Makes room for `len` more bytes and returns their absolute range.
    fn reserve(&mut self, len: usize) -> Result<Range<usize>, EncodeError> {
        let end = self
            .offset
            .checked_add(len)
            .ok_or(BufferError::CapacityOverflow)?;

        if let Err(err) = self.buf.ensure_capacity(end) {
            tracing::debug!(offset = self.offset, len, %err, "encode buffer cannot fit write");
            return Err(err.into());
        }

        Ok(self.offset..end)
    }

    /// Copies `parts` back to back at the offset as a single write.
    fn put(&mut self, parts: &[&[u8]]) -> Result<(), EncodeError> {
        let len = parts.iter().map(|part| part.len()).sum();
        let range = self.reserve(len)?;
        let capacity = self.buf.capacity();

        let Some(mut dst) = self.buf.as_mut_slice().get_mut(range.clone()) else {
            return Err(BufferError::CapacityExceeded {
                required: range.end,
                capacity,
            }
            .into());
        };

        for part in parts {
            let (head, tail) = core::mem::take(&mut dst).split_at_mut(part.len());
            head.copy_from_slice(part);
            dst = tail;
        }

        self.offset = range.end;

        // Invariant must be preserved before returning.
        self.debug_assert_invariant();

        Ok(())
    }

    /// Writes `count` as a prefix followed by `body`, atomically.
    fn put_prefixed(&mut self, count: usize, body: &[u8]) -> Result<(), EncodeError> {
        let mut scratch = [0u8; PREFIX_MAX_LEN];
        let prefix_len = self.encode_prefix_logged(count, &mut scratch)?;

        self.put(&[&scratch[..prefix_len], body])
    }

    fn encode_prefix_logged(
        &self,
        value: usize,
        scratch: &mut [u8; PREFIX_MAX_LEN],
    ) -> Result<usize, EncodeError> {
        encode_prefix(value, scratch).inspect_err(|err| {
            tracing::debug!(offset = self.offset, %err, "prefix rejected");
        })
    }

    /// Copies `bytes` verbatim.
    pub fn write(&mut self, bytes: &[u8]) -> Result<&mut Self, EncodeError> {
        self.put(&[bytes])?;
        Ok(self)
    }

    /// Reserves `len` bytes without writing them.
    ///
    /// The skipped region holds whatever the buffer held before: zeroes for
    /// freshly grown storage, prior contents for a reused slice.
    pub fn skip(&mut self, len: usize) -> Result<&mut Self, EncodeError> {
        let range = self.reserve(len)?;
        self.offset = range.end;
        self.debug_assert_invariant();

        Ok(self)
    }

    pub fn bool(&mut self, value: bool) -> Result<&mut Self, EncodeError> {
        let byte = [value as u8];

        self.put(&[byte.as_slice()])?;
        Ok(self)
    }

    /// Writes a length or count tag. Values above `PREFIX_MAX` are rejected.
    pub fn prefix(&mut self, value: usize) -> Result<&mut Self, EncodeError> {
        let mut scratch = [0u8; PREFIX_MAX_LEN];
        let len = self.encode_prefix_logged(value, &mut scratch)?;

        self.put(&[&scratch[..len]])?;
        Ok(self)
    }

    /// Writes a length-prefixed byte string.
    pub fn bytes<'p>(&mut self, payload: impl Into<Payload<'p>>) -> Result<&mut Self, EncodeError> {
        let bytes = payload.into().to_bytes()?;

        self.put_prefixed(bytes.len(), bytes.as_ref())?;
        Ok(self)
    }

    /// Writes a byte string whose length the reader already knows. No prefix.
    pub fn fixed_bytes<'p>(
        &mut self,
        payload: impl Into<Payload<'p>>,
    ) -> Result<&mut Self, EncodeError> {
        let bytes = payload.into().to_bytes()?;

        self.put(&[bytes.as_ref()])?;
        Ok(self)
    }

    /// Decodes `hex` and writes it as a length-prefixed byte string.
    pub fn hex(&mut self, hex: &str) -> Result<&mut Self, EncodeError> {
        self.bytes(Payload::Hex(hex))
    }

    /// Decodes `hex` and writes it without a prefix.
    pub fn fixed_hex(&mut self, hex: &str) -> Result<&mut Self, EncodeError> {
        self.fixed_bytes(Payload::Hex(hex))
    }

    /// Writes `text` under `encoding`, tagged with its character count.
    ///
    /// The tag counts characters, not bytes. The two differ for non-ASCII
    /// UTF-8 text, in which case a reader cannot recover the string.
    pub fn string(&mut self, text: &str, encoding: TextEncoding) -> Result<&mut Self, EncodeError> {
        let bytes = encoding.encode(text)?;

        self.put_prefixed(text.chars().count(), bytes.as_ref())?;
        Ok(self)
    }

    /// Writes the item count, then each item through `encode_item`.
    ///
    /// If any item fails the offset is rewound to where the array began.
    pub fn array<T, E, F>(&mut self, items: &[T], mut encode_item: F) -> Result<&mut Self, E>
    where
        E: From<EncodeError>,
        F: FnMut(&mut Self, &T) -> Result<(), E>,
    {
        let checkpoint = self.offset;

        if let Err(err) = self.array_items(items, &mut encode_item) {
            self.offset = checkpoint;
            return Err(err);
        }

        Ok(self)
    }

    fn array_items<T, E, F>(&mut self, items: &[T], encode_item: &mut F) -> Result<(), E>
    where
        E: From<EncodeError>,
        F: FnMut(&mut Self, &T) -> Result<(), E>,
    {
        self.prefix(items.len())?;

        for item in items {
            encode_item(self, item)?;
        }

        Ok(())
    }

    /// Writes the item count, then each item through its [`Encode`] impl.
    pub fn array_of<T: Encode>(&mut self, items: &[T]) -> Result<&mut Self, EncodeError> {
        self.array(items, |enc, item| item.encode(enc))
    }

    pub fn value<T: Encode + ?Sized>(&mut self, value: &T) -> Result<&mut Self, EncodeError> {
        value.encode(self)?;
        Ok(self)
    }

    /// Absolute write position in the backing buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Bytes written since `start`.
    pub fn bytes_written(&self) -> usize {
        self.offset - self.start
    }

    /// The region written so far.
    pub fn as_written(&self) -> &[u8] {
        self.buf
            .as_slice()
            .get(self.start..self.offset)
            .unwrap_or_default()
    }

    /// Closes the cursor and returns exactly the written region.
    pub fn finish(self) -> B::Output {
        self.debug_assert_invariant();
        tracing::trace!(bytes_written = self.bytes_written(), "encoder finished");

        self.buf.into_region(self.start..self.offset)
    }
}
