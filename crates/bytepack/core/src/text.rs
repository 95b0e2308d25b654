// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Text encodings accepted by `Encoder::string` and `Decoder::string`.
//!
//! Strings are tagged with their character count, so only encodings that can
//! spend one byte per character on the common path are offered.

use alloc::borrow::Cow;
use core::fmt;
use core::str::FromStr;

use crate::error::{DecodeError, EncodeError, UnknownEncoding};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
    Ascii,
}

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf8",
            TextEncoding::Latin1 => "latin1",
            TextEncoding::Ascii => "ascii",
        }
    }

    #[inline(always)]
    fn max_char(&self) -> u32 {
        match self {
            TextEncoding::Utf8 => char::MAX as u32,
            TextEncoding::Latin1 => 0xff,
            TextEncoding::Ascii => 0x7f,
        }
    }

    pub(crate) fn encode<'s>(&self, text: &'s str) -> Result<Cow<'s, [u8]>, EncodeError> {
        if *self == TextEncoding::Utf8 || text.is_ascii() {
            return Ok(Cow::Borrowed(text.as_bytes()));
        }

        let max = self.max_char();
        text.chars()
            .map(|ch| {
                if ch as u32 <= max {
                    Ok(ch as u8)
                } else {
                    Err(EncodeError::Unrepresentable {
                        encoding: *self,
                        ch,
                    })
                }
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(Cow::Owned)
    }

    pub(crate) fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        match self {
            TextEncoding::Utf8 => core::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|_| DecodeError::InvalidText(*self)),
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            TextEncoding::Ascii => {
                if !bytes.is_ascii() {
                    return Err(DecodeError::InvalidText(*self));
                }
                Ok(bytes.iter().map(|&b| b as char).collect())
            }
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = UnknownEncoding;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
            "latin1" | "binary" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            "ascii" | "us-ascii" => Ok(TextEncoding::Ascii),
            _ => Err(UnknownEncoding(name.to_owned())),
        }
    }
}
