// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

use super::block::Block128;
use crate::consts::BLOCK_SIZE;

type Row = [Block128; 256];

/// Precomputed multiples of a fixed `H`, one row per byte position.
///
/// `rows[p][v]` is the element with byte `v` at position `p` (all other
/// bytes zero) multiplied by `H`. A product `x * H` is then the XOR of the
/// 16 entries selected by the bytes of `x`.
///
/// Lookups are indexed by data bytes, so timing depends on cache behaviour.
pub struct MulTable {
    rows: Box<[Row]>,
}

impl MulTable {
    /// Builds the table for `h` (4096 entries, 64 KiB).
    pub fn new(h: Block128) -> Self {
        // powers[j] = H * x^j
        let mut powers = [Block128::ZERO; 128];
        let mut power = h;
        for slot in powers.iter_mut() {
            *slot = power;
            power = power.mul_x();
        }
        power.zeroize();

        let mut rows = vec![[Block128::ZERO; 256]; BLOCK_SIZE].into_boxed_slice();

        for (position, row) in rows.iter_mut().enumerate() {
            for (value, entry) in row.iter_mut().enumerate() {
                let mut acc = Block128::ZERO;

                // Bit k of the byte (MSB first) is the coefficient of x^(8p + k).
                for k in 0..8 {
                    let mask = 0u64.wrapping_sub(((value >> (7 - k)) & 1) as u64);
                    let term = powers[position * 8 + k];

                    acc.high ^= term.high & mask;
                    acc.low ^= term.low & mask;
                }

                *entry = acc;
            }
        }

        powers.zeroize();

        Self { rows }
    }

    /// Computes `x * H`.
    #[inline]
    pub fn mul_h(&self, x: Block128) -> Block128 {
        let mut bytes = x.to_bytes();
        let mut acc = Block128::ZERO;

        for (row, byte) in self.rows.iter().zip(bytes.iter()) {
            acc ^= row[usize::from(*byte)];
        }

        bytes.zeroize();

        acc
    }

    #[cfg(test)]
    pub(crate) fn entry(&self, position: usize, value: u8) -> Block128 {
        self.rows[position][usize::from(value)]
    }
}

impl Drop for MulTable {
    fn drop(&mut self) {
        for row in self.rows.iter_mut() {
            row.zeroize();
        }
    }
}

impl core::fmt::Debug for MulTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "MulTable {{ [protected] }}")
    }
}
