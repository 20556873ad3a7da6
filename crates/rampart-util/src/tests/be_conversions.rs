// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{u64_pair_from_be, u64_pair_to_be};

#[test]
fn test_u64_pair_from_be_splits_halves() {
    let bytes = [
        0x66, 0xe9, 0x4b, 0xd4, 0xef, 0x8a, 0x2c, 0x3b, 0x88, 0x4c, 0xfa, 0x59, 0xca, 0x34, 0x2b,
        0x2e,
    ];

    let (high, low) = u64_pair_from_be(&bytes);

    assert_eq!(high, 0x66e94bd4ef8a2c3b);
    assert_eq!(low, 0x884cfa59ca342b2e);
}

#[test]
fn test_u64_pair_to_be_writes_halves() {
    let mut bytes = [0u8; 16];
    u64_pair_to_be(0x0102030405060708, 0x090a0b0c0d0e0f10, &mut bytes);

    assert_eq!(bytes, core::array::from_fn::<u8, 16, _>(|i| i as u8 + 1));
}

#[test]
fn test_u64_pair_msb_is_first_byte() {
    let mut bytes = [0u8; 16];
    u64_pair_to_be(1 << 63, 1, &mut bytes);

    assert_eq!(bytes[0], 0x80);
    assert_eq!(bytes[15], 0x01);
    assert!(bytes[1..15].iter().all(|b| *b == 0));
}

#[test]
fn test_u64_pair_from_be_places_each_byte() {
    for i in 0..16 {
        let mut bytes = [0u8; 16];
        bytes[i] = 0xa5;

        let shift = 8 * (7 - (i % 8));
        let expected = if i < 8 {
            (0xa5u64 << shift, 0)
        } else {
            (0, 0xa5u64 << shift)
        };

        assert_eq!(u64_pair_from_be(&bytes), expected, "byte {i}");
    }
}

#[test]
fn test_u64_pair_from_be_inverts_to_be() {
    let mut bytes = [0u8; 16];
    u64_pair_to_be(u64::MAX, 0x8000_0000_0000_0001, &mut bytes);

    assert_eq!(u64_pair_from_be(&bytes), (u64::MAX, 0x8000_0000_0000_0001));
}
