// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-GCM error types.

use rampart_rand::EntropyError;

use crate::consts::{BLOCK_SIZE, NONCE_SIZE, TAG_SIZE};

/// Errors that can occur during AES-GCM operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AeadError {
    #[error("invalid key length: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeyLength(usize),

    #[error("invalid block length: {0} bytes (expected {BLOCK_SIZE})")]
    InvalidBlockLength(usize),

    #[error("unsupported nonce length: {0} bytes (expected {NONCE_SIZE})")]
    UnsupportedNonceLength(usize),

    #[error("invalid tag length: {0} bytes (expected {TAG_SIZE})")]
    InvalidTagLength(usize),

    #[error("ciphertext shorter than the {TAG_SIZE}-byte tag")]
    CiphertextTooShort,

    #[error("authentication failed: tag mismatch")]
    AuthenticationFailure,

    #[error("input exceeds GCM length limits")]
    InputTooLarge,

    #[error("entropy error")]
    Entropy(#[from] EntropyError),
}
