// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::{BitXor, BitXorAssign};

use rampart_util::{u64_pair_from_be, u64_pair_to_be};
use zeroize::DefaultIsZeroes;

use crate::consts::BLOCK_SIZE;

/// Reduction constant `R = 11100001 || 0^120`.
pub(crate) const R: u64 = 0xe1 << 56;

/// A 128-bit field element / GCM block as two big-endian 64-bit halves.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block128 {
    pub high: u64,
    pub low: u64,
}

impl DefaultIsZeroes for Block128 {}

impl Block128 {
    pub const ZERO: Self = Self::new(0, 0);

    /// Multiplicative identity (`x^0`, the leftmost bit).
    pub const ONE: Self = Self::new(1 << 63, 0);

    #[inline(always)]
    pub const fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    #[inline(always)]
    pub fn from_bytes(bytes: &[u8; BLOCK_SIZE]) -> Self {
        let (high, low) = u64_pair_from_be(bytes);
        Self { high, low }
    }

    /// Loads up to 16 bytes, zero-padding on the right.
    #[inline(always)]
    pub(crate) fn from_partial(chunk: &[u8]) -> Self {
        let mut bytes = [0u8; BLOCK_SIZE];
        let len = chunk.len().min(BLOCK_SIZE);
        bytes[..len].copy_from_slice(&chunk[..len]);

        Self::from_bytes(&bytes)
    }

    #[inline(always)]
    pub fn to_bytes(self) -> [u8; BLOCK_SIZE] {
        let mut bytes = [0u8; BLOCK_SIZE];
        u64_pair_to_be(self.high, self.low, &mut bytes);
        bytes
    }

    /// Returns bit `i` (0 = most significant bit of `high`) as 0 or 1.
    ///
    /// `i` must be below 128.
    #[inline(always)]
    pub(crate) fn bit(self, i: usize) -> u64 {
        debug_assert!(i < 128);

        if i < 64 {
            (self.high >> (63 - i)) & 1
        } else {
            (self.low >> (127 - i)) & 1
        }
    }

    /// Shifts the whole 128-bit value right by one bit.
    #[inline(always)]
    pub fn shr1(self) -> Self {
        Self {
            high: self.high >> 1,
            low: (self.low >> 1) | (self.high << 63),
        }
    }

    /// Multiplies by `x`: shift right, folding in `R` when bit 127 falls off.
    #[inline(always)]
    pub fn mul_x(self) -> Self {
        let carry = 0u64.wrapping_sub(self.low & 1);
        let shifted = self.shr1();

        Self {
            high: shifted.high ^ (R & carry),
            low: shifted.low,
        }
    }

    /// Adds `n` to the rightmost 32 bits modulo 2^32; the other 96 bits are kept.
    #[inline(always)]
    pub fn inc32(self, n: u32) -> Self {
        let counter = (self.low as u32).wrapping_add(n);

        Self {
            high: self.high,
            low: (self.low & 0xffff_ffff_0000_0000) | u64::from(counter),
        }
    }
}

impl BitXor for Block128 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            high: self.high ^ rhs.high,
            low: self.low ^ rhs.low,
        }
    }
}

impl BitXorAssign for Block128 {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.high ^= rhs.high;
        self.low ^= rhs.low;
    }
}
