// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-GCM authenticated encryption (SP800-38D, 96-bit nonces, 128-bit tags).

use rampart_rand::NonceGenerator;
use rampart_util::constant_time_eq;
use tracing::{debug, trace};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::aes::{AesKeySize, ExpandedKey};
use crate::consts::{MAX_AAD_LEN, MAX_PLAINTEXT_LEN, NONCE_SIZE, TAG_SIZE};
use crate::error::AeadError;
use crate::gctr::{apply_keystream, initial_counter_block};
use crate::gf128::{Block128, HashKey, MulStrategy};
use crate::ghash::ghash;
use crate::traits::AeadApi;

/// An AES-GCM context bound to one key.
///
/// Holds the expanded key, the hash subkey `H = E(K, 0^128)` and, for
/// [`MulStrategy::Table`], its multiplication table. Nothing is written after
/// construction, so one context can serve concurrent `seal`/`open` calls
/// from many threads.
///
/// # Example
///
/// ```
/// use rampart_gcm::AesGcm;
///
/// let gcm = AesGcm::new(&[0x42u8; 32]).expect("Failed to create AesGcm");
/// let nonce = [0u8; 12];
///
/// let sealed = gcm.seal(&nonce, b"secret", b"header").expect("Failed to seal");
/// assert_eq!(sealed.len(), 6 + 16);
///
/// let opened = gcm.open(&nonce, &sealed, b"header").expect("Failed to open");
/// assert_eq!(opened, b"secret");
/// ```
pub struct AesGcm {
    expanded_key: ExpandedKey,
    hash_key: HashKey,
}

/// Values scoped to one seal or open call.
#[derive(Zeroize, ZeroizeOnDrop)]
struct WorkingState {
    icb: Block128,
    tag_mask: Block128,
    len_block: Block128,
    tag: Block128,
}

impl WorkingState {
    fn new(expanded_key: &ExpandedKey, nonce: &[u8; NONCE_SIZE]) -> Self {
        let icb = initial_counter_block(nonce);
        let tag_mask = Block128::from_bytes(&expanded_key.encrypt(&icb.to_bytes()));

        Self {
            icb,
            tag_mask,
            len_block: Block128::ZERO,
            tag: Block128::ZERO,
        }
    }

    /// `GHASH(A || pad || C || pad || len(A) || len(C)) ^ E(K, ICB)`.
    fn compute_tag(&mut self, hash_key: &HashKey, aad: &[u8], ciphertext: &[u8]) -> [u8; TAG_SIZE] {
        // Lengths were checked against the GCM limits, so the bit counts fit.
        self.len_block = Block128::new((aad.len() as u64) << 3, (ciphertext.len() as u64) << 3);

        self.tag = ghash(hash_key, aad, Block128::ZERO);
        self.tag = ghash(hash_key, ciphertext, self.tag);
        self.tag = hash_key.mul_h(self.tag ^ self.len_block);

        (self.tag ^ self.tag_mask).to_bytes()
    }
}

impl AesGcm {
    /// Creates a context with the default multiply strategy.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::InvalidKeyLength`] unless `key` is 16, 24 or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, AeadError> {
        Self::with_strategy(key, MulStrategy::default())
    }

    /// Creates a context that multiplies in GHASH with `strategy`.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::InvalidKeyLength`] unless `key` is 16, 24 or 32 bytes.
    pub fn with_strategy(key: &[u8], strategy: MulStrategy) -> Result<Self, AeadError> {
        let expanded_key = ExpandedKey::new(key)?;

        let mut h_bytes = expanded_key.encrypt(&[0u8; 16]);
        let hash_key = HashKey::new(Block128::from_bytes(&h_bytes), strategy);
        h_bytes.zeroize();

        debug!(
            key_bits = expanded_key.key_size().bits(),
            strategy = strategy.name(),
            "AES-GCM context created"
        );

        Ok(Self {
            expanded_key,
            hash_key,
        })
    }

    pub fn key_size(&self) -> AesKeySize {
        self.expanded_key.key_size()
    }

    pub fn strategy(&self) -> MulStrategy {
        self.hash_key.strategy()
    }

    /// Always 12.
    pub fn nonce_size(&self) -> usize {
        NONCE_SIZE
    }

    /// Bytes added by [`seal`](Self::seal): the 16-byte tag.
    pub fn overhead(&self) -> usize {
        TAG_SIZE
    }

    /// Encrypts and authenticates `plaintext`, returning `ciphertext || tag`.
    ///
    /// # Errors
    ///
    /// - [`AeadError::UnsupportedNonceLength`] if `nonce` is not 12 bytes
    /// - [`AeadError::InputTooLarge`] if `plaintext` or `aad` exceeds the GCM limits
    pub fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, AeadError> {
        check_nonce(nonce)?;
        check_lengths(plaintext.len(), aad.len())?;

        let mut output = Vec::with_capacity(plaintext.len() + TAG_SIZE);
        output.extend_from_slice(plaintext);

        let mut tag = [0u8; TAG_SIZE];
        self.seal_in_place_detached(nonce, aad, &mut output, &mut tag)?;
        output.extend_from_slice(&tag);

        Ok(output)
    }

    /// Verifies and decrypts `ciphertext || tag`.
    ///
    /// The input is never modified. No plaintext is produced unless the tag
    /// verifies.
    ///
    /// # Errors
    ///
    /// - [`AeadError::UnsupportedNonceLength`] if `nonce` is not 12 bytes
    /// - [`AeadError::CiphertextTooShort`] if the input cannot hold a tag
    /// - [`AeadError::InputTooLarge`] if the ciphertext or `aad` exceeds the GCM limits
    /// - [`AeadError::AuthenticationFailure`] if the tag does not match
    pub fn open(&self, nonce: &[u8], ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>, AeadError> {
        check_nonce(nonce)?;

        if ciphertext.len() < TAG_SIZE {
            return Err(AeadError::CiphertextTooShort);
        }

        let (body, tag) = ciphertext.split_at(ciphertext.len() - TAG_SIZE);
        let tag: &[u8; TAG_SIZE] = tag
            .try_into()
            .expect("infallible: split leaves exactly TAG_SIZE bytes");

        let mut plaintext = body.to_vec();
        self.open_in_place_detached(nonce, aad, &mut plaintext, tag)?;

        Ok(plaintext)
    }

    /// Encrypts `buffer` in place and writes the tag separately.
    ///
    /// # Errors
    ///
    /// - [`AeadError::UnsupportedNonceLength`] if `nonce` is not 12 bytes
    /// - [`AeadError::InputTooLarge`] if `buffer` or `aad` exceeds the GCM limits
    pub fn seal_in_place_detached(
        &self,
        nonce: &[u8],
        aad: &[u8],
        buffer: &mut [u8],
        tag: &mut [u8; TAG_SIZE],
    ) -> Result<(), AeadError> {
        let nonce = check_nonce(nonce)?;
        check_lengths(buffer.len(), aad.len())?;

        trace!(plaintext_len = buffer.len(), aad_len = aad.len(), "seal");

        let mut state = WorkingState::new(&self.expanded_key, nonce);
        apply_keystream(&self.expanded_key, state.icb, buffer);
        *tag = state.compute_tag(&self.hash_key, aad, buffer);

        Ok(())
    }

    /// Verifies `tag` over `buffer` and decrypts it in place.
    ///
    /// On authentication failure `buffer` is zeroized.
    ///
    /// # Errors
    ///
    /// - [`AeadError::UnsupportedNonceLength`] if `nonce` is not 12 bytes
    /// - [`AeadError::InputTooLarge`] if `buffer` or `aad` exceeds the GCM limits
    /// - [`AeadError::AuthenticationFailure`] if the tag does not match
    pub fn open_in_place_detached(
        &self,
        nonce: &[u8],
        aad: &[u8],
        buffer: &mut [u8],
        tag: &[u8; TAG_SIZE],
    ) -> Result<(), AeadError> {
        let nonce = check_nonce(nonce)?;
        check_lengths(buffer.len(), aad.len())?;

        trace!(ciphertext_len = buffer.len(), aad_len = aad.len(), "open");

        let mut state = WorkingState::new(&self.expanded_key, nonce);
        let mut expected = state.compute_tag(&self.hash_key, aad, buffer);
        let verified = constant_time_eq(&expected, tag);
        expected.zeroize();

        if !verified {
            buffer.zeroize();
            debug!("AES-GCM authentication failed");
            return Err(AeadError::AuthenticationFailure);
        }

        apply_keystream(&self.expanded_key, state.icb, buffer);

        Ok(())
    }

    /// Seals under a nonce drawn from `generator`, returning `(nonce, ciphertext || tag)`.
    ///
    /// # Errors
    ///
    /// - [`AeadError::Entropy`] if the generator fails or has exhausted its nonce space
    /// - [`AeadError::InputTooLarge`] if `plaintext` or `aad` exceeds the GCM limits
    pub fn seal_with_generator<G: NonceGenerator<NONCE_SIZE>>(
        &self,
        generator: &mut G,
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<([u8; NONCE_SIZE], Vec<u8>), AeadError> {
        let nonce = generator.generate_nonce()?;
        let sealed = self.seal(&nonce, plaintext, aad)?;

        Ok((nonce, sealed))
    }
}

impl core::fmt::Debug for AesGcm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "AesGcm {{ {:?}, {:?}, [protected] }}",
            self.key_size(),
            self.strategy()
        )
    }
}

impl AeadApi for AesGcm {
    fn api_seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, AeadError> {
        self.seal(nonce, plaintext, aad)
    }

    fn api_open(&self, nonce: &[u8], ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>, AeadError> {
        self.open(nonce, ciphertext, aad)
    }

    fn api_seal_detached(
        &self,
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8],
    ) -> Result<(), AeadError> {
        let tag_len = tag.len();
        let tag: &mut [u8; TAG_SIZE] = tag
            .try_into()
            .map_err(|_| AeadError::InvalidTagLength(tag_len))?;

        self.seal_in_place_detached(nonce, aad, data, tag)
    }

    fn api_open_detached(
        &self,
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<(), AeadError> {
        let tag: &[u8; TAG_SIZE] = tag
            .try_into()
            .map_err(|_| AeadError::InvalidTagLength(tag.len()))?;

        self.open_in_place_detached(nonce, aad, data, tag)
    }

    fn api_key_size(&self) -> usize {
        self.key_size().key_len()
    }

    fn api_nonce_size(&self) -> usize {
        self.nonce_size()
    }

    fn api_tag_size(&self) -> usize {
        self.overhead()
    }
}

fn check_nonce(nonce: &[u8]) -> Result<&[u8; NONCE_SIZE], AeadError> {
    nonce
        .try_into()
        .map_err(|_| AeadError::UnsupportedNonceLength(nonce.len()))
}

/// Rejects inputs over the GCM bounds before any cryptographic work.
pub(crate) fn check_lengths(text_len: usize, aad_len: usize) -> Result<(), AeadError> {
    if text_len as u64 > MAX_PLAINTEXT_LEN || aad_len as u64 > MAX_AAD_LEN {
        debug!(text_len, aad_len, "AES-GCM input exceeds length limits");
        return Err(AeadError::InputTooLarge);
    }

    Ok(())
}
