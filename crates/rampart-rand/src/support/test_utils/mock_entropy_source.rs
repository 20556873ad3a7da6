// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// What a [`MockEntropySource`] does on its next draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Draws real OS randomness.
    None,
    /// Writes the given byte into every requested position.
    FillWith(u8),
    /// Every draw fails with [`EntropyError::EntropyNotAvailable`].
    FailAtFillBytes,
}

/// Scriptable entropy source for nonce-session and sealing tests.
///
/// Counts how many draws were requested, including failed ones, so tests
/// can assert when a nonce session touches its entropy source.
pub struct MockEntropySource {
    behaviour: MockEntropySourceBehaviour,
    draws: Cell<usize>,
}

impl MockEntropySource {
    /// Creates a mock that follows `behaviour` until changed.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            behaviour,
            draws: Cell::new(0),
        }
    }

    /// Switches behaviour for subsequent draws.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Number of `fill_bytes` calls seen so far.
    pub fn draws(&self) -> usize {
        self.draws.get()
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.draws.set(self.draws.get() + 1);

        match self.behaviour {
            MockEntropySourceBehaviour::None => SystemEntropySource {}.fill_bytes(dest),
            MockEntropySourceBehaviour::FillWith(byte) => {
                dest.fill(byte);
                Ok(())
            }
            MockEntropySourceBehaviour::FailAtFillBytes => Err(EntropyError::EntropyNotAvailable),
        }
    }
}
