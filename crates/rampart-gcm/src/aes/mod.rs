// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES block cipher (FIPS-197) for 128, 192 and 256-bit keys.
//!
//! Only single-block transformations live here. Every mode of operation
//! (GCTR, GHASH subkey derivation) is built on [`ExpandedKey::encrypt`].

#[cfg(test)]
mod tests;

mod cipher;
mod consts;
mod key_schedule;

pub use consts::MAX_EXPANDED_WORDS;
pub use key_schedule::{AesKeySize, ExpandedKey};

use crate::consts::BLOCK_SIZE;
use crate::error::AeadError;

/// Runs the key schedule over raw key material.
///
/// # Errors
///
/// Returns [`AeadError::InvalidKeyLength`] unless `key` is 16, 24 or 32 bytes.
pub fn expand_key(key: &[u8]) -> Result<ExpandedKey, AeadError> {
    ExpandedKey::new(key)
}

/// Encrypts one block given as a slice.
///
/// # Errors
///
/// Returns [`AeadError::InvalidBlockLength`] unless `block` is exactly 16 bytes.
pub fn encrypt_block(key: &ExpandedKey, block: &[u8]) -> Result<[u8; BLOCK_SIZE], AeadError> {
    let block: &[u8; BLOCK_SIZE] = block
        .try_into()
        .map_err(|_| AeadError::InvalidBlockLength(block.len()))?;

    Ok(key.encrypt(block))
}

/// Decrypts one block given as a slice (inverse cipher, not used by GCM).
///
/// # Errors
///
/// Returns [`AeadError::InvalidBlockLength`] unless `block` is exactly 16 bytes.
pub fn decrypt_block(key: &ExpandedKey, block: &[u8]) -> Result<[u8; BLOCK_SIZE], AeadError> {
    let block: &[u8; BLOCK_SIZE] = block
        .try_into()
        .map_err(|_| AeadError::InvalidBlockLength(block.len()))?;

    Ok(key.decrypt(block))
}
