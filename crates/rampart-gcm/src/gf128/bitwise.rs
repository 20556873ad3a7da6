// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::block::Block128;

/// Reference multiply (SP800-38D Section 6.3, Algorithm 1).
///
/// Walks the 128 bits of `y` from bit 0, accumulating `v = x * x^i` wherever
/// the bit is set. Selection is done with masks rather than branches.
pub fn mul_bitwise(x: Block128, y: Block128) -> Block128 {
    let mut z = Block128::ZERO;
    let mut v = x;

    for i in 0..128 {
        let mask = 0u64.wrapping_sub(y.bit(i));

        z.high ^= v.high & mask;
        z.low ^= v.low & mask;
        v = v.mul_x();
    }

    z
}
