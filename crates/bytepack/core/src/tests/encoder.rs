// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bytepack_util::HexError;

use crate::encode_buffer::{GrowableBuffer, GrowthPolicy};
use crate::encoder::Encoder;
use crate::error::{BufferError, EncodeError};
use crate::payload::Payload;
use crate::prefix::PREFIX_MAX;
use crate::support::test_utils::patterned_bytes;
use crate::text::TextEncoding;

#[test]
fn test_encoder_default_is_empty() {
    let enc: Encoder = Encoder::default();

    assert_eq!(enc.offset(), 0);
    assert_eq!(enc.bytes_written(), 0);
    assert_eq!(enc.capacity(), 256);
    assert!(enc.finish().is_empty());
}

#[test]
fn test_encoder_string_example() {
    let mut enc = Encoder::new();
    enc.string("hi", TextEncoding::Latin1)
        .expect("Failed to string(..)");

    assert_eq!(enc.finish(), vec![0x02, b'h', b'i']);
}

#[test]
fn test_encoder_bool() {
    let mut enc = Encoder::new();
    enc.bool(true)
        .and_then(|enc| enc.bool(false))
        .expect("Failed to bool(..)");

    assert_eq!(enc.finish(), vec![1, 0]);
}

#[test]
fn test_encoder_write_is_verbatim() {
    let mut enc = Encoder::new();
    enc.write(&[0xfe, 0xff, 0x00])
        .expect("Failed to write(..)");

    assert_eq!(enc.bytes_written(), 3);
    assert_eq!(enc.finish(), vec![0xfe, 0xff, 0x00]);
}

#[test]
fn test_encoder_prefix_size_classes() {
    let mut enc = Encoder::new();
    enc.prefix(0xfd)
        .and_then(|enc| enc.prefix(0x100))
        .and_then(|enc| enc.prefix(0x1_0000))
        .expect("Failed to prefix(..)");

    assert_eq!(
        enc.finish(),
        vec![0xfd, 0xfe, 0x00, 0x01, 0xff, 0x00, 0x00, 0x01, 0x00]
    );
}

#[test]
fn test_encoder_prefix_out_of_range_writes_nothing() {
    let mut enc = Encoder::new();
    enc.bool(true).expect("Failed to bool(..)");

    let result = enc.prefix(PREFIX_MAX + 1);

    assert!(matches!(result, Err(EncodeError::PrefixOutOfRange(v)) if v == PREFIX_MAX + 1));
    assert_eq!(enc.bytes_written(), 1);
    assert_eq!(enc.finish(), vec![1]);
}

#[test]
fn test_encoder_bytes_prefixes_length() {
    let mut enc = Encoder::new();
    enc.bytes(&[0xaa, 0xbb, 0xcc]).expect("Failed to bytes(..)");

    assert_eq!(enc.finish(), vec![3, 0xaa, 0xbb, 0xcc]);
}

#[test]
fn test_encoder_fixed_bytes_omits_prefix() {
    let mut enc = Encoder::new();
    enc.fixed_bytes(&[0xaa, 0xbb])
        .expect("Failed to fixed_bytes(..)");

    assert_eq!(enc.finish(), vec![0xaa, 0xbb]);
}

#[test]
fn test_encoder_bytes_empty_writes_zero_prefix() {
    let mut enc = Encoder::new();
    enc.bytes(&[]).expect("Failed to bytes(..)");

    assert_eq!(enc.finish(), vec![0]);
}

#[test]
fn test_encoder_hex() {
    let mut enc = Encoder::new();
    enc.hex("deadBEEF").expect("Failed to hex(..)");

    assert_eq!(enc.finish(), vec![4, 0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn test_encoder_fixed_hex() {
    let mut enc = Encoder::new();
    enc.fixed_hex("0102").expect("Failed to fixed_hex(..)");

    assert_eq!(enc.finish(), vec![0x01, 0x02]);
}

#[test]
fn test_encoder_bytes_with_hex_payload_matches_hex() {
    let mut via_payload = Encoder::new();
    via_payload
        .bytes(Payload::hex("c0ffee"))
        .expect("Failed to bytes(..)");

    let mut via_hex = Encoder::new();
    via_hex.hex("c0ffee").expect("Failed to hex(..)");

    assert_eq!(via_payload.finish(), via_hex.finish());
}

#[test]
fn test_encoder_invalid_hex_writes_nothing() {
    let mut enc = Encoder::new();

    let odd = enc.hex("abc");
    assert!(matches!(
        odd,
        Err(EncodeError::InvalidHex(HexError::OddLength(3)))
    ));

    let digit = enc.fixed_hex("zz");
    assert!(matches!(
        digit,
        Err(EncodeError::InvalidHex(HexError::InvalidDigit { index: 0, byte: b'z' }))
    ));

    assert_eq!(enc.bytes_written(), 0);
}

#[test]
fn test_encoder_string_prefixes_character_count() {
    let mut latin1 = Encoder::new();
    latin1
        .string("é", TextEncoding::Latin1)
        .expect("Failed to string(..)");
    assert_eq!(latin1.finish(), vec![1, 0xe9]);

    // One character, two bytes: the tag still says one.
    let mut utf8 = Encoder::new();
    utf8.string("é", TextEncoding::Utf8)
        .expect("Failed to string(..)");
    assert_eq!(utf8.finish(), vec![1, 0xc3, 0xa9]);
}

#[test]
fn test_encoder_string_unrepresentable_writes_nothing() {
    let mut enc = Encoder::new();

    let result = enc.string("née", TextEncoding::Ascii);

    assert_eq!(
        result.err(),
        Some(EncodeError::Unrepresentable {
            encoding: TextEncoding::Ascii,
            ch: 'é'
        })
    );
    assert_eq!(enc.bytes_written(), 0);
}

#[test]
fn test_encoder_skip_reserves_space() {
    let mut enc = Encoder::new();
    enc.skip(3)
        .and_then(|enc| enc.bool(true))
        .expect("Failed to skip(..)");

    assert_eq!(enc.bytes_written(), 4);
    assert_eq!(enc.finish(), vec![0, 0, 0, 1]);
}

#[test]
fn test_encoder_array_empty() {
    let mut enc = Encoder::new();
    enc.array(&[] as &[bool], |enc, item| enc.bool(*item).map(|_| ()))
        .expect("Failed to array(..)");

    assert_eq!(enc.finish(), vec![0]);
}

#[test]
fn test_encoder_array_items_follow_count() {
    let mut enc = Encoder::new();
    enc.array(&[true, false, true], |enc, item| {
        enc.bool(*item).map(|_| ())
    })
    .expect("Failed to array(..)");

    assert_eq!(enc.finish(), vec![3, 1, 0, 1]);
}

#[test]
fn test_encoder_array_wide_count() {
    let items = vec![true; 300];
    let mut enc = Encoder::new();
    enc.array_of(&items).expect("Failed to array_of(..)");

    let out = enc.finish();
    assert_eq!(out.len(), 3 + 300);
    assert_eq!(&out[..3], &[0xfe, 0x2c, 0x01]);
    assert!(out[3..].iter().all(|&b| b == 1));
}

#[test]
fn test_encoder_array_rewinds_on_item_failure() {
    let mut enc = Encoder::new();
    enc.bool(true).expect("Failed to bool(..)");

    let result = enc.array(&[1usize, 2, PREFIX_MAX + 1], |enc, item| {
        enc.prefix(*item).map(|_| ())
    });

    assert!(matches!(result, Err(EncodeError::PrefixOutOfRange(_))));
    assert_eq!(enc.bytes_written(), 1);
    assert_eq!(enc.finish(), vec![1]);
}

#[test]
fn test_encoder_array_propagates_caller_errors() {
    #[derive(Debug, PartialEq)]
    enum RecordError {
        Encode(EncodeError),
        Rejected(u8),
    }

    impl From<EncodeError> for RecordError {
        fn from(err: EncodeError) -> Self {
            RecordError::Encode(err)
        }
    }

    let mut enc = Encoder::new();
    let result = enc.array(&[1u8, 2, 3], |enc, item| {
        if *item == 3 {
            return Err(RecordError::Rejected(*item));
        }
        enc.fixed_bytes(&[*item])?;
        Ok(())
    });

    assert_eq!(result.err(), Some(RecordError::Rejected(3)));
    assert_eq!(enc.bytes_written(), 0);
}

#[test]
fn test_encoder_growth_preserves_data() {
    let data = patterned_bytes(1000);
    let mut enc = Encoder::with_policy(GrowthPolicy {
        initial_capacity: 1,
        factor: 4,
    });

    for chunk in data.chunks(7) {
        enc.write(chunk).expect("Failed to write(..)");
    }

    assert_eq!(enc.capacity(), 1024);
    assert_eq!(enc.as_written(), data.as_slice());
    assert_eq!(enc.finish(), data);
}

#[test]
fn test_encoder_growth_matches_ungrown_reference() {
    let data = patterned_bytes(5000);

    let mut grown = Encoder::with_capacity(1);
    let mut reference = Encoder::with_capacity(16 * 1024);
    for enc in [&mut grown, &mut reference] {
        enc.bytes(&data)
            .and_then(|enc| enc.string("tail", TextEncoding::Utf8))
            .expect("Failed to encode");
    }

    assert_eq!(reference.capacity(), 16 * 1024);
    assert_eq!(grown.finish(), reference.finish());
}

#[test]
fn test_encoder_from_vec_drops_bytes_before_start() {
    let mut enc = Encoder::from_vec(vec![0xaa; 4], 4);
    enc.write(&[1, 2]).expect("Failed to write(..)");

    assert_eq!(enc.start(), 4);
    assert_eq!(enc.offset(), 6);
    assert_eq!(enc.bytes_written(), 2);
    assert_eq!(enc.finish(), vec![1, 2]);
}

#[test]
fn test_encoder_from_vec_pads_short_vec_to_start() {
    let mut enc = Encoder::from_vec(Vec::new(), 3);
    enc.bool(true).expect("Failed to bool(..)");

    assert_eq!(enc.finish(), vec![1]);
}

#[test]
fn test_encoder_from_slice_writes_sub_region_only() {
    let mut storage = [0xee; 8];

    let mut enc = Encoder::from_slice(&mut storage, 3).expect("Failed to from_slice(..)");
    enc.bool(true)
        .and_then(|enc| enc.write(&[7]))
        .expect("Failed to encode");
    assert_eq!(enc.bytes_written(), 2);

    let region = enc.finish();
    assert_eq!(region, &[1, 7]);

    assert_eq!(storage, [0xee, 0xee, 0xee, 1, 7, 0xee, 0xee, 0xee]);
}

#[test]
fn test_encoder_from_slice_start_past_end() {
    let mut storage = [0u8; 2];

    let result = Encoder::from_slice(&mut storage, 3);

    assert!(matches!(
        result,
        Err(EncodeError::BufferError(BufferError::CapacityExceeded {
            required: 3,
            capacity: 2
        }))
    ));
}

#[test]
fn test_encoder_from_slice_overflow_is_atomic() {
    let mut storage = [0u8; 3];
    let mut enc = Encoder::from_slice(&mut storage, 0).expect("Failed to from_slice(..)");

    // Prefix fits, payload doesn't: nothing may be written.
    let result = enc.bytes(&[1, 2, 3]);

    assert!(matches!(
        result,
        Err(EncodeError::BufferError(BufferError::CapacityExceeded {
            required: 4,
            capacity: 3
        }))
    ));
    assert_eq!(enc.bytes_written(), 0);
    assert_eq!(enc.finish(), &[] as &[u8]);
    assert_eq!(storage, [0, 0, 0]);
}

#[test]
fn test_encoder_from_slice_skip_past_capacity() {
    let mut storage = [0u8; 2];
    let mut enc = Encoder::from_slice(&mut storage, 1).expect("Failed to from_slice(..)");

    assert!(enc.skip(2).is_err());
    assert!(enc.skip(1).is_ok());
    assert_eq!(enc.bytes_written(), 1);
}

#[test]
fn test_encoder_with_buffer_accepts_any_backend() {
    let buf = GrowableBuffer::with_policy(GrowthPolicy {
        initial_capacity: 2,
        factor: 2,
    });

    let mut enc = Encoder::with_buffer(buf, 1).expect("Failed to with_buffer(..)");
    enc.write(&[1, 2, 3]).expect("Failed to write(..)");

    assert_eq!(enc.capacity(), 4);
    assert_eq!(enc.finish(), vec![1, 2, 3]);
}
