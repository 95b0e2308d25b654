// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Encoder and decoder cursors for compact length-prefixed binary buffers.
//!
//! An [`Encoder`] appends typed values onto a buffer; a [`Decoder`] issued the
//! same sequence of calls reads them back. Lengths and counts are tagged with a
//! 1, 3 or 5 byte prefix (see [`prefix`]).
//!
//! ```
//! use bytepack::{Decoder, Encoder, TextEncoding};
//!
//! let mut enc = Encoder::new();
//! enc.string("hi", TextEncoding::Latin1)?.bool(true)?;
//! let bytes = enc.finish();
//! assert_eq!(bytes, [0x02, b'h', b'i', 0x01]);
//!
//! let mut dec = Decoder::new(&bytes);
//! assert_eq!(dec.string(TextEncoding::Latin1)?, "hi");
//! assert!(dec.bool()?);
//! assert_eq!(dec.finish(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The stream carries no schema: keeping the encode and decode call sequences
//! in step is up to the caller, typically through [`Encode`] and [`Decode`]
//! impls on record types.

pub use bytepack_core::*;
