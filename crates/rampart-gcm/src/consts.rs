// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sizes and limits for AES-GCM with 96-bit nonces.

/// Block size in bytes (AES block, GHASH block)
pub const BLOCK_SIZE: usize = 16;

/// Nonce size in bytes
pub const NONCE_SIZE: usize = 12;

/// Authentication tag size in bytes
pub const TAG_SIZE: usize = 16;

/// Largest plaintext per nonce: 2^39 - 256 bits.
pub const MAX_PLAINTEXT_LEN: u64 = (1 << 36) - 32;

/// Largest AAD: 2^64 - 1 bits, rounded down to whole bytes.
pub const MAX_AAD_LEN: u64 = (1 << 61) - 1;
