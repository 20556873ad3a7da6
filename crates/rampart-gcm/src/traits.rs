// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AEAD trait definitions.

use crate::error::AeadError;

/// Object-safe AEAD API for generic code and testing.
///
/// Lets tests drive every key size and multiply strategy through one
/// `&dyn AeadApi`, with slice-typed nonces and tags so length validation is
/// reachable. Callers should prefer the inherent methods on
/// [`AesGcm`](crate::AesGcm).
pub trait AeadApi {
    fn api_seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, AeadError>;

    fn api_open(&self, nonce: &[u8], ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>, AeadError>;

    fn api_seal_detached(
        &self,
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8],
    ) -> Result<(), AeadError>;

    fn api_open_detached(
        &self,
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<(), AeadError>;

    fn api_key_size(&self) -> usize;
    fn api_nonce_size(&self) -> usize;
    fn api_tag_size(&self) -> usize;
}
