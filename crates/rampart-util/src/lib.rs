// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte utilities shared by the Rampart crates.
//!
//! Constant-time comparison for authentication tags, big-endian packing of
//! 128-bit blocks into two 64-bit halves, and (behind `test-utils`) helpers
//! for decoding test vectors and checking zeroization.

#![cfg_attr(not(test), no_std)]

#[cfg(any(test, feature = "test-utils"))]
extern crate alloc;

#[cfg(any(test, feature = "test-utils"))]
use alloc::vec::Vec;

use subtle::ConstantTimeEq;

#[cfg(test)]
mod tests;

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise. Slices of different
/// length compare unequal immediately; length is not secret.
///
/// # Example
///
/// ```
/// use rampart_util::constant_time_eq;
///
/// let a = [1, 2, 3, 4];
/// let b = [1, 2, 3, 4];
/// let c = [1, 2, 3, 5];
///
/// assert!(constant_time_eq(&a, &b));
/// assert!(!constant_time_eq(&a, &c));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Splits a 16-byte block into its big-endian `(high, low)` 64-bit halves.
///
/// # Example
///
/// ```
/// use rampart_util::u64_pair_from_be;
///
/// let mut block = [0u8; 16];
/// block[0] = 0x80;
/// block[15] = 0x01;
///
/// assert_eq!(u64_pair_from_be(&block), (0x8000_0000_0000_0000, 1));
/// ```
#[inline(always)]
pub fn u64_pair_from_be(bytes: &[u8; 16]) -> (u64, u64) {
    let mut high = [0u8; 8];
    let mut low = [0u8; 8];
    high.copy_from_slice(&bytes[..8]);
    low.copy_from_slice(&bytes[8..]);

    (u64::from_be_bytes(high), u64::from_be_bytes(low))
}

/// Writes `(high, low)` as a 16-byte big-endian block.
#[inline(always)]
pub fn u64_pair_to_be(high: u64, low: u64, bytes: &mut [u8; 16]) {
    bytes[..8].copy_from_slice(&high.to_be_bytes());
    bytes[8..].copy_from_slice(&low.to_be_bytes());
}

/// Parses a hexadecimal string into bytes.
///
/// The string must have an even number of characters and contain only
/// valid hexadecimal digits (0-9, a-f, A-F).
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use rampart_util::hex_to_bytes;
///
/// let bytes = hex_to_bytes("deadbeef");
/// assert_eq!(bytes, vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[cfg(any(test, feature = "test-utils"))]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string has odd length");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}

/// Verifies that every byte of the slice is zero.
///
/// # Example
///
/// ```
/// use rampart_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0, 0, 1]));
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[inline]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}
