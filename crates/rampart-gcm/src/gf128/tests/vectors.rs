// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Products taken from the McGrew-Viega GCM test case intermediates.

use crate::gf128::{
    Block128, MulStrategy, MulTable, multiply, mul_bitwise, mul_karatsuba,
};
use crate::gf128::karatsuba::{bmul64, clmul};

/// Hash subkey of test cases 2-4 (key feffe992...).
const H: Block128 = Block128::new(0xb83b_5337_08bf_535d, 0x0aa6_e529_80d5_3b78);

/// x as a field element.
const X: Block128 = Block128::new(1 << 62, 0);

#[test]
fn test_first_aad_block_times_h() {
    let a1 = Block128::new(0xfeed_face_dead_beef, 0xfeed_face_dead_beef);
    let expected = Block128::new(0xed56_aaf8_a72d_6704, 0x9fdb_9228_edba_1322);

    for strategy in MulStrategy::ALL {
        assert_eq!(strategy.multiply(a1, H), expected, "strategy {}", strategy.name());
    }
}

#[test]
fn test_first_ciphertext_block_times_h() {
    let c1 = Block128::new(0x4283_1ec2_2177_7424, 0x4b72_21b7_84d0_d49c);
    let expected = Block128::new(0x59ed_3f2b_b1a0_aaa0, 0x7c9f_56c6_a504_647b);

    for strategy in MulStrategy::ALL {
        assert_eq!(strategy.multiply(c1, H), expected, "strategy {}", strategy.name());
    }
}

#[test]
fn test_identity_and_zero() {
    for strategy in MulStrategy::ALL {
        assert_eq!(strategy.multiply(H, Block128::ONE), H);
        assert_eq!(strategy.multiply(Block128::ONE, H), H);
        assert_eq!(strategy.multiply(H, Block128::ZERO), Block128::ZERO);
        assert_eq!(strategy.multiply(Block128::ZERO, H), Block128::ZERO);
    }
}

#[test]
fn test_times_x_matches_mul_x() {
    let mut v = H;

    for _ in 0..200 {
        assert_eq!(mul_bitwise(v, X), v.mul_x());
        assert_eq!(mul_karatsuba(v, X), v.mul_x());
        v = v.mul_x();
    }
}

#[test]
fn test_x127_squared_reduces() {
    // x^127 * x = x^128 = x^7 + x^2 + x + 1
    let x127 = Block128::new(0, 1);
    let expected = Block128::new(0xe100_0000_0000_0000, 0);

    assert_eq!(multiply(x127, X), expected);
    assert_eq!(mul_bitwise(x127, X), expected);
}

#[test]
fn test_table_entries() {
    let table = MulTable::new(H);

    for position in 0..16 {
        assert_eq!(table.entry(position, 0), Block128::ZERO);
    }

    // 0x80 in byte 0 is x^0.
    assert_eq!(table.entry(0, 0x80), H);
    // 0x40 in byte 0 is x^1.
    assert_eq!(table.entry(0, 0x40), H.mul_x());

    let mut byte_15 = [0u8; 16];
    byte_15[15] = 0x5a;
    assert_eq!(
        table.entry(15, 0x5a),
        mul_bitwise(Block128::from_bytes(&byte_15), H)
    );
}

#[test]
fn test_table_debug_hides_entries() {
    let table = MulTable::new(H);
    assert_eq!(format!("{:?}", table), "MulTable { [protected] }");
}

#[test]
fn test_bmul64_small_values() {
    // (x + 1)^2 = x^2 + 1 over GF(2)
    assert_eq!(bmul64(0b11, 0b11), 0b101);
    assert_eq!(bmul64(0b101, 0b11), 0b1111);
    assert_eq!(bmul64(u64::MAX, 1), u64::MAX);
    assert_eq!(bmul64(0, u64::MAX), 0);
}

#[test]
fn test_clmul_high_word() {
    assert_eq!(clmul(1 << 63, 1 << 63), (0, 1 << 62));
    assert_eq!(clmul(1 << 63, 2), (0, 1));
    assert_eq!(clmul(u64::MAX, u64::MAX), (0x5555_5555_5555_5555, 0x5555_5555_5555_5555));
}

#[test]
fn test_strategy_metadata() {
    assert_eq!(MulStrategy::default(), MulStrategy::Table);
    assert_eq!(MulStrategy::Bitwise.name(), "bitwise");
    assert_eq!(MulStrategy::Table.name(), "table");
    assert_eq!(MulStrategy::Karatsuba.name(), "karatsuba");
}

#[test]
fn test_hash_key_reports_strategy() {
    use crate::gf128::HashKey;

    for strategy in MulStrategy::ALL {
        let key = HashKey::new(H, strategy);

        assert_eq!(key.strategy(), strategy);
        assert_eq!(key.h(), H);
    }
}
