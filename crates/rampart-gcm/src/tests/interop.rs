// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-for-byte comparison with the RustCrypto `aes-gcm` crate.

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes128Gcm, Aes256Gcm, Nonce};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::{AesGcm, MulStrategy};

type Aes192Gcm = aes_gcm::AesGcm<::aes::Aes192, U12>;

const ITERATIONS: usize = 300;

fn reference_seal(key: &[u8], nonce: &[u8; 12], plaintext: &[u8], aad: &[u8]) -> Vec<u8> {
    let nonce = Nonce::from_slice(nonce);
    let payload = Payload { msg: plaintext, aad };

    match key.len() {
        16 => Aes128Gcm::new_from_slice(key)
            .expect("Failed to create Aes128Gcm")
            .encrypt(nonce, payload),
        24 => Aes192Gcm::new_from_slice(key)
            .expect("Failed to create Aes192Gcm")
            .encrypt(nonce, payload),
        32 => Aes256Gcm::new_from_slice(key)
            .expect("Failed to create Aes256Gcm")
            .encrypt(nonce, payload),
        _ => unreachable!("unsupported key length"),
    }
    .expect("Failed to encrypt with aes-gcm")
}

fn reference_open(key: &[u8], nonce: &[u8; 12], sealed: &[u8], aad: &[u8]) -> Option<Vec<u8>> {
    let nonce = Nonce::from_slice(nonce);
    let payload = Payload { msg: sealed, aad };

    match key.len() {
        16 => Aes128Gcm::new_from_slice(key)
            .expect("Failed to create Aes128Gcm")
            .decrypt(nonce, payload),
        24 => Aes192Gcm::new_from_slice(key)
            .expect("Failed to create Aes192Gcm")
            .decrypt(nonce, payload),
        32 => Aes256Gcm::new_from_slice(key)
            .expect("Failed to create Aes256Gcm")
            .decrypt(nonce, payload),
        _ => unreachable!("unsupported key length"),
    }
    .ok()
}

#[test]
fn test_fuzz_against_aes_gcm_crate() {
    let mut rng = StdRng::seed_from_u64(0x6763_6d5f_6675_7a7a);

    for iteration in 0..ITERATIONS {
        let key_len = [16usize, 24, 32][iteration % 3];
        let strategy = MulStrategy::ALL[(iteration / 3) % 3];

        let mut key = vec![0u8; key_len];
        let mut nonce = [0u8; 12];
        let mut plaintext = vec![0u8; rng.random_range(0..4000)];
        let mut aad = vec![0u8; rng.random_range(0..4000)];

        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut nonce);
        rng.fill_bytes(&mut plaintext);
        rng.fill_bytes(&mut aad);

        let gcm = AesGcm::with_strategy(&key, strategy).expect("Failed to create AesGcm");

        let ours = gcm.seal(&nonce, &plaintext, &aad).expect("Failed to seal(..)");
        let theirs = reference_seal(&key, &nonce, &plaintext, &aad);
        assert_eq!(ours, theirs, "iteration {iteration}");

        let opened = gcm.open(&nonce, &theirs, &aad).expect("Failed to open(..)");
        assert_eq!(opened, plaintext, "iteration {iteration}");

        assert_eq!(
            reference_open(&key, &nonce, &ours, &aad),
            Some(plaintext),
            "iteration {iteration}"
        );
    }
}

#[test]
fn test_reference_rejects_our_tampered_output() {
    let mut rng = StdRng::seed_from_u64(7);
    let key: [u8; 32] = rng.random();
    let nonce: [u8; 12] = rng.random();

    let gcm = AesGcm::new(&key).expect("Failed to create AesGcm");
    let mut sealed = gcm.seal(&nonce, b"interop", b"aad").expect("Failed to seal(..)");
    sealed[0] ^= 1;

    assert_eq!(reference_open(&key, &nonce, &sealed, b"aad"), None);
    assert!(gcm.open(&nonce, &sealed, b"aad").is_err());
}
