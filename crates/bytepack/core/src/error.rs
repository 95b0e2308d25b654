// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bytepack_util::HexError;
use thiserror::Error;

use crate::text::TextEncoding;

#[derive(Debug, Error, Eq, PartialEq, Clone, Copy)]
pub enum BufferError {
    #[error("CapacityExceeded: {required} bytes required, capacity is {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },

    #[error("CapacityOverflow")]
    CapacityOverflow,
}

#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum EncodeError {
    #[error("PrefixOutOfRange: {0} cannot be encoded as a prefix")]
    PrefixOutOfRange(usize),

    #[error("InvalidHex: {0}")]
    InvalidHex(#[from] HexError),

    #[error("Unrepresentable: {ch:?} has no {encoding} encoding")]
    Unrepresentable { encoding: TextEncoding, ch: char },

    #[error("BufferError: {0}")]
    BufferError(#[from] BufferError),
}

#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum DecodeError {
    #[error("OutOfBounds: {requested} bytes requested, {remaining} remaining")]
    OutOfBounds { requested: usize, remaining: usize },

    #[error("InvalidBool: expected 0 or 1, found {0:#04x}")]
    InvalidBool(u8),

    #[error("InvalidText: bytes are not valid {0}")]
    InvalidText(TextEncoding),
}

#[derive(Debug, Error, Eq, PartialEq, Clone)]
#[error("UnknownEncoding: {0}")]
pub struct UnknownEncoding(pub String);
