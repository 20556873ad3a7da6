// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

use super::bitwise::mul_bitwise;
use super::block::Block128;
use super::karatsuba::mul_karatsuba;
use super::table::MulTable;

/// How GHASH multiplies by the hash subkey.
///
/// All variants compute the same product; they differ in speed, memory and
/// side-channel profile.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MulStrategy {
    /// 128 shift/XOR steps per multiply. No tables.
    Bitwise,
    /// 16 lookups per multiply into a 64 KiB per-key table.
    #[default]
    Table,
    /// Three 64-bit carry-less products and a shift fold. No tables.
    Karatsuba,
}

impl MulStrategy {
    pub const ALL: [MulStrategy; 3] = [Self::Bitwise, Self::Table, Self::Karatsuba];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bitwise => "bitwise",
            Self::Table => "table",
            Self::Karatsuba => "karatsuba",
        }
    }

    /// Multiplies two arbitrary elements with this strategy.
    ///
    /// For `Table` this builds a table for `y` first, so it is only suited
    /// to tests and one-off products.
    pub fn multiply(self, x: Block128, y: Block128) -> Block128 {
        HashKey::new(y, self).mul_h(x)
    }
}

enum Engine {
    Bitwise,
    Table(MulTable),
    Karatsuba,
}

/// The hash subkey bound to a multiply strategy.
pub(crate) struct HashKey {
    h: Block128,
    engine: Engine,
}

impl HashKey {
    pub(crate) fn new(h: Block128, strategy: MulStrategy) -> Self {
        let engine = match strategy {
            MulStrategy::Bitwise => Engine::Bitwise,
            MulStrategy::Table => Engine::Table(MulTable::new(h)),
            MulStrategy::Karatsuba => Engine::Karatsuba,
        };

        Self { h, engine }
    }

    pub(crate) fn strategy(&self) -> MulStrategy {
        match self.engine {
            Engine::Bitwise => MulStrategy::Bitwise,
            Engine::Table(_) => MulStrategy::Table,
            Engine::Karatsuba => MulStrategy::Karatsuba,
        }
    }

    /// Computes `x * H`.
    #[inline]
    pub(crate) fn mul_h(&self, x: Block128) -> Block128 {
        match &self.engine {
            Engine::Bitwise => mul_bitwise(x, self.h),
            Engine::Table(table) => table.mul_h(x),
            Engine::Karatsuba => mul_karatsuba(x, self.h),
        }
    }

    #[cfg(test)]
    pub(crate) fn h(&self) -> Block128 {
        self.h
    }
}

impl Drop for HashKey {
    fn drop(&mut self) {
        self.h.zeroize();
    }
}
