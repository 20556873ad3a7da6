// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES key expansion (FIPS-197 Section 5.2).

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::consts::{MAX_EXPANDED_WORDS, RCON, SBOX};
use crate::error::AeadError;

/// Supported AES key sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AesKeySize {
    Aes128,
    Aes192,
    Aes256,
}

impl AesKeySize {
    /// Maps a raw key length in bytes to its key size.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::InvalidKeyLength`] for anything but 16, 24 or 32.
    pub fn from_key_len(len: usize) -> Result<Self, AeadError> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(AeadError::InvalidKeyLength(other)),
        }
    }

    /// Number of 32-bit words in the key (`Nk`).
    pub const fn nk(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr = Nk + 6`).
    pub const fn rounds(self) -> usize {
        self.nk() + 6
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        self.nk() * 4
    }

    /// Key length in bits.
    pub const fn bits(self) -> usize {
        self.key_len() * 8
    }

    /// Number of words produced by the key schedule, `4 * (Nr + 1)`.
    pub const fn expanded_words(self) -> usize {
        4 * (self.rounds() + 1)
    }
}

/// Round keys derived from raw key material.
///
/// Computed once, read-only afterwards, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ExpandedKey {
    words: [u32; MAX_EXPANDED_WORDS],
    #[zeroize(skip)]
    key_size: AesKeySize,
}

impl ExpandedKey {
    /// Expands a 16, 24 or 32-byte key.
    ///
    /// The first `Nk` words are the key itself (big-endian). Every later word is
    /// `w[i - Nk] ^ temp`, where `temp = w[i - 1]` passes through
    /// `SubWord(RotWord(.)) ^ Rcon[i / Nk]` when `i % Nk == 0`, and through a
    /// bare `SubWord` when `Nk == 8` and `i % Nk == 4`.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::InvalidKeyLength`] for any other key length.
    pub fn new(key: &[u8]) -> Result<Self, AeadError> {
        let key_size = AesKeySize::from_key_len(key.len())?;
        let nk = key_size.nk();
        let mut words = [0u32; MAX_EXPANDED_WORDS];

        for (word, chunk) in words.iter_mut().zip(key.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for i in nk..key_size.expanded_words() {
            let mut temp = words[i - 1];

            if i % nk == 0 {
                temp = sub_word(rot_word(temp)) ^ RCON[i / nk];
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }

            words[i] = words[i - nk] ^ temp;
        }

        Ok(Self { words, key_size })
    }

    pub fn key_size(&self) -> AesKeySize {
        self.key_size
    }

    pub fn rounds(&self) -> usize {
        self.key_size.rounds()
    }

    /// All `4 * (Nr + 1)` schedule words.
    pub fn words(&self) -> &[u32] {
        &self.words[..self.key_size.expanded_words()]
    }

    /// The four words XORed into the state at `round`.
    #[inline(always)]
    pub(crate) fn round_key(&self, round: usize) -> &[u32] {
        &self.words[round * 4..round * 4 + 4]
    }
}

impl core::fmt::Debug for ExpandedKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ExpandedKey {{ {:?}, [protected] }}", self.key_size)
    }
}

#[inline(always)]
pub(crate) fn sub_byte(byte: u8) -> u8 {
    SBOX[(byte >> 4) as usize][(byte & 0x0f) as usize]
}

/// Cyclic left rotation by one byte: `[a0, a1, a2, a3] -> [a1, a2, a3, a0]`.
#[inline(always)]
pub(crate) fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

#[inline(always)]
pub(crate) fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sub_byte))
}
