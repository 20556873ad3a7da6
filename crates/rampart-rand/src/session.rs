// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem::size_of;

use crate::error::EntropyError;
use crate::traits::{EntropySource, NonceGenerator};

/// The invocation field written into the last bytes of every nonce.
pub(crate) type Invocation = u32;

/// Session nonce generator using the SP800-38D §8.2.1 construction.
///
/// Each nonce is `fixed || invocation`:
/// - **Fixed field**: the leading `NONCE_SIZE - 4` bytes, drawn from the
///   entropy source once per session
/// - **Invocation field**: a big-endian `u32` starting at 0
///
/// The invocation field never repeats within a session. After 2^32 nonces the
/// session is exhausted and every further call returns
/// [`EntropyError::NonceSpaceExhausted`]; start a new session (or rotate the
/// key) at that point. 2^32 is also the SP800-38D §8.3 bound on invocations
/// per key when the fixed field is random.
///
/// # Example
///
/// ```
/// use rampart_rand::{NonceGenerator, NonceSessionGenerator, SystemEntropySource};
///
/// let mut generator = NonceSessionGenerator::<_, 12>::new(SystemEntropySource {});
///
/// let first = generator.generate_nonce().expect("Failed to generate_nonce()");
/// let second = generator.generate_nonce().expect("Failed to generate_nonce()");
///
/// assert_eq!(first[..8], second[..8]);
/// assert_eq!(first[8..], [0, 0, 0, 0]);
/// assert_eq!(second[8..], [0, 0, 0, 1]);
/// ```
pub struct NonceSessionGenerator<E: EntropySource, const NONCE_SIZE: usize> {
    entropy: E,
    fixed: [u8; NONCE_SIZE],
    invocations: u64,
    initialized: bool,
}

impl<E: EntropySource, const NONCE_SIZE: usize> NonceSessionGenerator<E, NONCE_SIZE> {
    const FIXED_LEN: usize = NONCE_SIZE - size_of::<Invocation>();

    /// Creates a new nonce session generator.
    ///
    /// The fixed field is drawn lazily on the first call to
    /// [`generate_nonce`](NonceGenerator::generate_nonce).
    ///
    /// # Arguments
    ///
    /// * `entropy` - Entropy source for the per-session fixed field
    pub fn new(entropy: E) -> Self {
        const {
            assert!(
                NONCE_SIZE >= size_of::<Invocation>() + 8,
                "fixed field must be at least 64 bits"
            );
        }

        Self {
            entropy,
            fixed: [0u8; NONCE_SIZE],
            invocations: 0,
            initialized: false,
        }
    }

    /// Number of nonces handed out so far in this session.
    pub fn invocations(&self) -> u64 {
        self.invocations
    }

    fn maybe_initialize(&mut self) -> Result<(), EntropyError> {
        if !self.initialized {
            self.entropy.fill_bytes(&mut self.fixed[..Self::FIXED_LEN])?;
            self.initialized = true;
        }

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn entropy_for_test(&self) -> &E {
        &self.entropy
    }

    #[cfg(test)]
    pub(crate) fn entropy_mut_for_test(&mut self) -> &mut E {
        &mut self.entropy
    }

    /// Fast-forwards the session to `invocations` nonces already issued.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn set_invocations_for_test(&mut self, invocations: u64) {
        self.invocations = invocations;
    }
}

impl<E: EntropySource, const NONCE_SIZE: usize> NonceGenerator<NONCE_SIZE>
    for NonceSessionGenerator<E, NONCE_SIZE>
{
    fn generate_nonce(&mut self) -> Result<[u8; NONCE_SIZE], EntropyError> {
        let invocation = Invocation::try_from(self.invocations)
            .map_err(|_| EntropyError::NonceSpaceExhausted)?;

        self.maybe_initialize()?;

        let mut nonce = self.fixed;
        nonce[Self::FIXED_LEN..].copy_from_slice(&invocation.to_be_bytes());

        self.invocations += 1;

        Ok(nonce)
    }
}
