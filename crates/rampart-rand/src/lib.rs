// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_rand
//!
//! Cryptographically secure random number generation for the Rampart crates.
//!
//! Provides the entropy source and nonce generators used when an AES-GCM
//! caller wants the library to pick 96-bit nonces instead of supplying them.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`NonceSessionGenerator`]: Fixed-field plus invocation-counter nonces (SP800-38D §8.2.1)
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for CSPRNGs
//! - [`NonceGenerator`]: Interface for nonce generation
//!
//! ## Example
//!
//! ```rust
//! use rampart_rand::{
//!     EntropySource, NonceGenerator, NonceSessionGenerator, SystemEntropySource,
//! };
//!
//! // Random key material
//! let entropy = SystemEntropySource {};
//! let mut key = [0u8; 16];
//! entropy.fill_bytes(&mut key).expect("Failed to generate entropy");
//!
//! // 96-bit GCM nonces
//! let mut nonce_gen = NonceSessionGenerator::<_, 12>::new(SystemEntropySource {});
//! let nonce = nonce_gen.generate_nonce().expect("Failed to generate nonce");
//! assert_eq!(nonce.len(), 12);
//! ```
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASI: `random_get`

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod session;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use session::NonceSessionGenerator;
pub use system::SystemEntropySource;
pub use traits::{EntropySource, NonceGenerator};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
