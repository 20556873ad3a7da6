// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Signature of the OS randomness backend (`getrandom::fill` in production).
pub(crate) type Backend<'a> = dyn Fn(&mut [u8]) -> Result<(), GetRandomError> + 'a;

/// OS-backed CSPRNG used for keys and nonce-session fixed fields.
///
/// Every call goes straight to `getrandom`; nothing is buffered in process
/// memory between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource {}

impl SystemEntropySource {
    /// Fills `dest` from `backend`. An empty `dest` never reaches the backend.
    pub(crate) fn fill_from(backend: &Backend<'_>, dest: &mut [u8]) -> Result<(), EntropyError> {
        if dest.is_empty() {
            return Ok(());
        }

        backend(dest).map_err(|_| EntropyError::EntropyNotAvailable)
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        Self::fill_from(&getrandom::fill, dest)
    }
}
