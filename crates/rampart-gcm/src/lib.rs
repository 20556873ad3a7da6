// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_gcm
//!
//! AES-GCM authenticated encryption (NIST SP800-38D) for 128, 192 and
//! 256-bit keys, with 96-bit nonces and 16-byte tags.
//!
//! ## Layout
//!
//! - [`aes`]: key schedule and single-block cipher (FIPS-197)
//! - [`gf128`]: GF(2^128) arithmetic with three interchangeable multiply strategies
//! - [`gctr`]: counter-mode keystream with a 32-bit wrapping counter
//! - [`AesGcm`]: the AEAD context (`seal` / `open`)
//!
//! The output of `seal` is `ciphertext || tag` with no other framing, byte
//! compatible with any standard AES-GCM implementation.
//!
//! ## Example
//!
//! ```
//! use rampart_gcm::{AesGcm, MulStrategy};
//! use rampart_rand::{NonceSessionGenerator, SystemEntropySource};
//!
//! let gcm = AesGcm::with_strategy(&[7u8; 16], MulStrategy::Karatsuba)
//!     .expect("Failed to create AesGcm");
//! let mut nonces = NonceSessionGenerator::<_, 12>::new(SystemEntropySource {});
//!
//! let (nonce, sealed) = gcm
//!     .seal_with_generator(&mut nonces, b"payload", b"")
//!     .expect("Failed to seal");
//! let opened = gcm.open(&nonce, &sealed, b"").expect("Failed to open");
//!
//! assert_eq!(opened, b"payload");
//! ```
//!
//! ## Side channels
//!
//! The S-box and the GHASH table are indexed by secret data. Use
//! [`MulStrategy::Karatsuba`] or [`MulStrategy::Bitwise`] to keep GHASH free
//! of secret-indexed lookups; the AES rounds remain table based.

#[cfg(test)]
mod tests;

pub mod aes;
pub mod gctr;
pub mod gf128;

mod aead;
mod consts;
mod error;
mod ghash;
mod traits;

pub use aead::AesGcm;
pub use self::aes::{AesKeySize, ExpandedKey};
pub use consts::{BLOCK_SIZE, MAX_AAD_LEN, MAX_PLAINTEXT_LEN, NONCE_SIZE, TAG_SIZE};
pub use error::AeadError;
pub use gf128::{Block128, MulStrategy};
pub use traits::AeadApi;
