// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! GF(2^128) arithmetic in the GCM bit convention.
//!
//! Elements are [`Block128`] values where bit 0 (the coefficient of `x^0`) is
//! the most significant bit of `high`. Addition is XOR; multiplication is
//! modulo `x^128 + x^7 + x^2 + x + 1`.
//!
//! Three multiply algorithms are provided and must agree bit for bit:
//!
//! - [`mul_bitwise`]: SP800-38D Algorithm 1, 128 shift/XOR steps
//! - [`MulTable`]: 16x256 precomputed multiples of a fixed `H`
//! - [`mul_karatsuba`]: 64-bit carry-less Karatsuba with a shift-based fold
//!
//! [`MulStrategy`] picks one of them when an AEAD context is built.

#[cfg(test)]
mod tests;

mod bitwise;
mod block;
mod karatsuba;
mod strategy;
mod table;

pub use bitwise::mul_bitwise;
pub use block::Block128;
pub use karatsuba::mul_karatsuba;
pub use strategy::MulStrategy;
pub use table::MulTable;

pub(crate) use strategy::HashKey;

/// Multiplies two field elements.
///
/// Uses the Karatsuba path, which has no secret-dependent branches or lookups.
#[inline]
pub fn multiply(x: Block128, y: Block128) -> Block128 {
    mul_karatsuba(x, y)
}
