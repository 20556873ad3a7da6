// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key expansion tests using FIPS-197 Appendix A vectors.

use rampart_util::hex_to_bytes;

use crate::aes::key_schedule::{rot_word, sub_byte, sub_word};
use crate::aes::{AesKeySize, ExpandedKey, expand_key};
use crate::error::AeadError;

#[test]
fn test_key_size_from_len() {
    assert_eq!(AesKeySize::from_key_len(16), Ok(AesKeySize::Aes128));
    assert_eq!(AesKeySize::from_key_len(24), Ok(AesKeySize::Aes192));
    assert_eq!(AesKeySize::from_key_len(32), Ok(AesKeySize::Aes256));

    for len in [0, 1, 15, 17, 23, 25, 31, 33, 64] {
        assert_eq!(
            AesKeySize::from_key_len(len),
            Err(AeadError::InvalidKeyLength(len))
        );
    }
}

#[test]
fn test_key_size_parameters() {
    assert_eq!(AesKeySize::Aes128.nk(), 4);
    assert_eq!(AesKeySize::Aes192.nk(), 6);
    assert_eq!(AesKeySize::Aes256.nk(), 8);

    assert_eq!(AesKeySize::Aes128.rounds(), 10);
    assert_eq!(AesKeySize::Aes192.rounds(), 12);
    assert_eq!(AesKeySize::Aes256.rounds(), 14);

    assert_eq!(AesKeySize::Aes128.bits(), 128);
    assert_eq!(AesKeySize::Aes256.key_len(), 32);
    assert_eq!(AesKeySize::Aes256.expanded_words(), 60);
}

#[test]
fn test_expand_key_rejects_invalid_lengths() {
    assert_eq!(
        expand_key(&[0u8; 20]).map(|k| k.key_size()),
        Err(AeadError::InvalidKeyLength(20))
    );
    assert_eq!(
        ExpandedKey::new(&[]).map(|k| k.key_size()),
        Err(AeadError::InvalidKeyLength(0))
    );
}

/// FIPS-197 Appendix A.1
#[test]
fn test_expand_aes128_key() {
    let key = hex_to_bytes("2b7e151628aed2a6abf7158809cf4f3c");
    let expanded = expand_key(&key).expect("Failed to expand_key(..)");

    assert_eq!(expanded.rounds(), 10);
    assert_eq!(expanded.words().len(), 44);
    assert_eq!(&expanded.words()[..4], &[0x2b7e1516, 0x28aed2a6, 0xabf71588, 0x09cf4f3c]);
    assert_eq!(expanded.words()[4], 0xa0fafe17);
    assert_eq!(expanded.words()[5], 0x88542cb1);
    assert_eq!(expanded.words()[43], 0xb6630ca6);
}

/// FIPS-197 Appendix A.2
#[test]
fn test_expand_aes192_key() {
    let key = hex_to_bytes("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b");
    let expanded = expand_key(&key).expect("Failed to expand_key(..)");

    assert_eq!(expanded.rounds(), 12);
    assert_eq!(expanded.words().len(), 52);
    assert_eq!(expanded.words()[6], 0xfe0c91f7);
    assert_eq!(expanded.words()[51], 0x01002202);
}

/// FIPS-197 Appendix A.3
#[test]
fn test_expand_aes256_key() {
    let key = hex_to_bytes("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");
    let expanded = expand_key(&key).expect("Failed to expand_key(..)");

    assert_eq!(expanded.rounds(), 14);
    assert_eq!(expanded.words().len(), 60);
    assert_eq!(expanded.words()[8], 0x9ba35411);
    // i % Nk == 4 takes the extra SubWord
    assert_eq!(expanded.words()[12], 0xa8b09c1a);
    assert_eq!(expanded.words()[59], 0x706c631e);
}

#[test]
fn test_rot_word() {
    assert_eq!(rot_word(0x09cf4f3c), 0xcf4f3c09);
    assert_eq!(rot_word(0x2a6c7605), 0x6c76052a);
}

#[test]
fn test_sub_word() {
    assert_eq!(sub_word(0xcf4f3c09), 0x8a84eb01);
    assert_eq!(sub_word(0x6c76052a), 0x50386be5);
}

#[test]
fn test_sub_byte_corners() {
    assert_eq!(sub_byte(0x00), 0x63);
    assert_eq!(sub_byte(0x53), 0xed);
    assert_eq!(sub_byte(0xff), 0x16);
}

#[test]
fn test_expanded_key_debug_hides_words() {
    let expanded = expand_key(&[0x42u8; 16]).expect("Failed to expand_key(..)");
    let debug = format!("{:?}", expanded);

    assert!(debug.contains("[protected]"));
    assert!(!debug.contains("42"));
}
