// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! GHASH: Horner evaluation of the data blocks at `H`.

use crate::consts::BLOCK_SIZE;
use crate::gf128::{Block128, HashKey};

/// Folds `data` into `initial`, one 16-byte block at a time.
///
/// `acc = (acc ^ block) * H`. A trailing partial block is zero-padded, so
/// callers get the per-segment padding GCM requires by hashing AAD and
/// ciphertext in separate calls.
#[inline]
pub(crate) fn ghash(hash_key: &HashKey, data: &[u8], initial: Block128) -> Block128 {
    data.chunks(BLOCK_SIZE).fold(initial, |acc, chunk| {
        hash_key.mul_h(acc ^ Block128::from_partial(chunk))
    })
}
