// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES round transformations over a column-major 4x4 state.

use zeroize::Zeroize;

use super::consts::INV_SBOX;
use super::key_schedule::{ExpandedKey, sub_byte};
use crate::consts::BLOCK_SIZE;

/// `state[row][col]`, loaded column by column from the input block.
pub(crate) type State = [[u8; 4]; 4];

impl ExpandedKey {
    /// Encrypts one 16-byte block (FIPS-197 Section 5.1).
    pub fn encrypt(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let rounds = self.rounds();
        let mut state = load_state(block);

        add_round_key(&mut state, self.round_key(0));

        for round in 1..=rounds {
            sub_bytes(&mut state);
            shift_rows(&mut state);
            if round != rounds {
                mix_columns(&mut state);
            }
            add_round_key(&mut state, self.round_key(round));
        }

        let output = store_state(&state);
        state.zeroize();

        output
    }

    /// Decrypts one 16-byte block (FIPS-197 Section 5.3, inverse cipher).
    pub fn decrypt(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let rounds = self.rounds();
        let mut state = load_state(block);

        add_round_key(&mut state, self.round_key(rounds));

        for round in (1..rounds).rev() {
            inv_shift_rows(&mut state);
            inv_sub_bytes(&mut state);
            add_round_key(&mut state, self.round_key(round));
            inv_mix_columns(&mut state);
        }

        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, self.round_key(0));

        let output = store_state(&state);
        state.zeroize();

        output
    }
}

#[inline(always)]
pub(crate) fn load_state(block: &[u8; BLOCK_SIZE]) -> State {
    let mut state = [[0u8; 4]; 4];

    for (col, chunk) in block.chunks_exact(4).enumerate() {
        for (row, byte) in chunk.iter().enumerate() {
            state[row][col] = *byte;
        }
    }

    state
}

#[inline(always)]
pub(crate) fn store_state(state: &State) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];

    for (col, chunk) in block.chunks_exact_mut(4).enumerate() {
        for (row, byte) in chunk.iter_mut().enumerate() {
            *byte = state[row][col];
        }
    }

    block
}

#[inline(always)]
pub(crate) fn add_round_key(state: &mut State, round_key: &[u32]) {
    for (col, word) in round_key.iter().enumerate() {
        for (row, byte) in word.to_be_bytes().iter().enumerate() {
            state[row][col] ^= byte;
        }
    }
}

#[inline(always)]
pub(crate) fn sub_bytes(state: &mut State) {
    for byte in state.iter_mut().flatten() {
        *byte = sub_byte(*byte);
    }
}

#[inline(always)]
pub(crate) fn inv_sub_bytes(state: &mut State) {
    for byte in state.iter_mut().flatten() {
        *byte = INV_SBOX[(*byte >> 4) as usize][(*byte & 0x0f) as usize];
    }
}

/// Row `r` rotates left by `r` positions.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut State) {
    for (r, row) in state.iter_mut().enumerate().skip(1) {
        row.rotate_left(r);
    }
}

#[inline(always)]
pub(crate) fn inv_shift_rows(state: &mut State) {
    for (r, row) in state.iter_mut().enumerate().skip(1) {
        row.rotate_right(r);
    }
}

#[inline(always)]
pub(crate) fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let [a0, a1, a2, a3] = [state[0][col], state[1][col], state[2][col], state[3][col]];

        state[0][col] = mul_mod(0x02, a0) ^ mul_mod(0x03, a1) ^ a2 ^ a3;
        state[1][col] = a0 ^ mul_mod(0x02, a1) ^ mul_mod(0x03, a2) ^ a3;
        state[2][col] = a0 ^ a1 ^ mul_mod(0x02, a2) ^ mul_mod(0x03, a3);
        state[3][col] = mul_mod(0x03, a0) ^ a1 ^ a2 ^ mul_mod(0x02, a3);
    }
}

#[inline(always)]
pub(crate) fn inv_mix_columns(state: &mut State) {
    for col in 0..4 {
        let [a0, a1, a2, a3] = [state[0][col], state[1][col], state[2][col], state[3][col]];

        state[0][col] = mul_mod(0x0e, a0)
            ^ mul_mod(0x0b, a1)
            ^ mul_mod(0x0d, a2)
            ^ mul_mod(0x09, a3);
        state[1][col] = mul_mod(0x09, a0)
            ^ mul_mod(0x0e, a1)
            ^ mul_mod(0x0b, a2)
            ^ mul_mod(0x0d, a3);
        state[2][col] = mul_mod(0x0d, a0)
            ^ mul_mod(0x09, a1)
            ^ mul_mod(0x0e, a2)
            ^ mul_mod(0x0b, a3);
        state[3][col] = mul_mod(0x0b, a0)
            ^ mul_mod(0x0d, a1)
            ^ mul_mod(0x09, a2)
            ^ mul_mod(0x0e, a3);
    }
}

/// Multiplication by `x` in GF(2^8) modulo `x^8 + x^4 + x^3 + x + 1`.
#[inline(always)]
pub(crate) fn xtime(x: u8) -> u8 {
    (x << 1) ^ (0u8.wrapping_sub(x >> 7) & 0x1b)
}

/// General GF(2^8) product by repeated doubling of `a` over the bits of `b`.
#[inline(always)]
pub(crate) fn mul_mod(a: u8, b: u8) -> u8 {
    let mut result = 0u8;
    let mut running = a;

    for bit in 0..8 {
        result ^= running & 0u8.wrapping_sub((b >> bit) & 1);
        running = xtime(running);
    }

    result
}
