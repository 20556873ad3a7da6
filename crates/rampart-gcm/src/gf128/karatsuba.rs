// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Carry-less multiply on 64-bit words.
//!
//! GCM stores coefficients bit-reflected, so a plain carry-less product of the
//! stored integers is the reflection of the field product, off by one bit.
//! Shifting the 256-bit product left by one restores the alignment; the fold
//! then works on reflected words, where multiplying by `x^k` is a right shift.

use super::block::Block128;

/// Low 64 bits of the carry-less product of `x` and `y`.
///
/// Each operand is split into four interleaved classes (every fourth bit) so
/// that integer multiplication carries land in bits that are masked away.
#[inline(always)]
pub(crate) fn bmul64(x: u64, y: u64) -> u64 {
    const M0: u64 = 0x1111_1111_1111_1111;
    const M1: u64 = 0x2222_2222_2222_2222;
    const M2: u64 = 0x4444_4444_4444_4444;
    const M3: u64 = 0x8888_8888_8888_8888;

    let (x0, x1, x2, x3) = (x & M0, x & M1, x & M2, x & M3);
    let (y0, y1, y2, y3) = (y & M0, y & M1, y & M2, y & M3);

    let z0 = x0.wrapping_mul(y0)
        ^ x1.wrapping_mul(y3)
        ^ x2.wrapping_mul(y2)
        ^ x3.wrapping_mul(y1);
    let z1 = x0.wrapping_mul(y1)
        ^ x1.wrapping_mul(y0)
        ^ x2.wrapping_mul(y3)
        ^ x3.wrapping_mul(y2);
    let z2 = x0.wrapping_mul(y2)
        ^ x1.wrapping_mul(y1)
        ^ x2.wrapping_mul(y0)
        ^ x3.wrapping_mul(y3);
    let z3 = x0.wrapping_mul(y3)
        ^ x1.wrapping_mul(y2)
        ^ x2.wrapping_mul(y1)
        ^ x3.wrapping_mul(y0);

    (z0 & M0) | (z1 & M1) | (z2 & M2) | (z3 & M3)
}

/// Full 128-bit carry-less product as `(low, high)` words.
///
/// The high word comes from the product of the reversed operands, which is
/// the reversed upper 127 bits.
#[inline(always)]
pub(crate) fn clmul(x: u64, y: u64) -> (u64, u64) {
    let low = bmul64(x, y);
    let high = bmul64(x.reverse_bits(), y.reverse_bits()).reverse_bits() >> 1;

    (low, high)
}

/// Multiplies two field elements with three 64-bit carry-less products.
pub fn mul_karatsuba(x: Block128, y: Block128) -> Block128 {
    let (lo0, lo1) = clmul(x.low, y.low);
    let (hi0, hi1) = clmul(x.high, y.high);
    let (mut mid0, mut mid1) = clmul(x.low ^ x.high, y.low ^ y.high);

    mid0 ^= lo0 ^ hi0;
    mid1 ^= lo1 ^ hi1;

    // 256-bit product, v0 least significant.
    let mut v0 = lo0;
    let mut v1 = lo1 ^ mid0;
    let mut v2 = hi0 ^ mid1;
    let mut v3 = hi1;

    v3 = (v3 << 1) | (v2 >> 63);
    v2 = (v2 << 1) | (v1 >> 63);
    v1 = (v1 << 1) | (v0 >> 63);
    v0 <<= 1;

    // Fold the low 128 bits (degrees 128..255) by x^7 + x^2 + x + 1.
    v2 ^= v0 ^ (v0 >> 1) ^ (v0 >> 2) ^ (v0 >> 7);
    v1 ^= (v0 << 63) ^ (v0 << 62) ^ (v0 << 57);
    v3 ^= v1 ^ (v1 >> 1) ^ (v1 >> 2) ^ (v1 >> 7);
    v2 ^= (v1 << 63) ^ (v1 << 62) ^ (v1 << 57);

    Block128::new(v3, v2)
}
