// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! GCTR: counter-mode keystream over the AES block cipher.
//!
//! Only the rightmost 32 bits of the counter block change. A single nonce
//! therefore covers at most 2^32 - 2 data blocks, which the length limits in
//! [`crate::MAX_PLAINTEXT_LEN`] enforce.

use zeroize::Zeroize;

use crate::aes::ExpandedKey;
use crate::consts::{BLOCK_SIZE, NONCE_SIZE};
use crate::gf128::Block128;

/// Builds `nonce || 0^31 || 1`.
pub fn initial_counter_block(nonce: &[u8; NONCE_SIZE]) -> Block128 {
    let mut bytes = [0u8; BLOCK_SIZE];
    bytes[..NONCE_SIZE].copy_from_slice(nonce);
    bytes[BLOCK_SIZE - 1] = 1;

    Block128::from_bytes(&bytes)
}

/// XORs the keystream for `icb` into `data`.
///
/// Block `i` (0-based) uses counter `inc32(icb, i + 1)`; the final block may
/// be partial.
pub fn apply_keystream(key: &ExpandedKey, icb: Block128, data: &mut [u8]) {
    let mut keystream = [0u8; BLOCK_SIZE];

    for (i, chunk) in data.chunks_mut(BLOCK_SIZE).enumerate() {
        let counter = icb.inc32((i as u32).wrapping_add(1));
        keystream = key.encrypt(&counter.to_bytes());

        for (byte, ks) in chunk.iter_mut().zip(keystream.iter()) {
            *byte ^= ks;
        }
    }

    keystream.zeroize();
}

/// Allocating form of [`apply_keystream`]; the output has the length of `message`.
pub fn cipher_blocks(key: &ExpandedKey, icb: Block128, message: &[u8]) -> Vec<u8> {
    let mut output = message.to_vec();
    apply_keystream(key, icb, &mut output);

    output
}
