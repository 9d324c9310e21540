// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! RC6 key expansion.
//!
//! The user key is loaded into the `L` array of little-endian words, the `S` table is seeded
//! from the magic constants and the two arrays are mixed together for `3 * max(t, c)` steps.
//! Only `S` survives as the round keys.

use crate::word::*;
use std::cmp::max;

/// Number of rounds performed by the block transform.
pub const ROUNDS: usize = 20;

/// Number of 32-bit round key words, `2 * ROUNDS + 4`.
pub const ROUND_KEY_WORDS: usize = 2 * ROUNDS + 4;

// ODD((E - 2) * (1 << 32))
const P32: u32 = 0xB7E1_5163;
// ODD((PHI - 1) * (1 << 32))
const Q32: u32 = 0x9E37_79B9;

/// The key lengths RC6 accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySize {
    /// 16 byte key.
    Bits128,
    /// 24 byte key.
    Bits192,
    /// 32 byte key.
    Bits256,
}

impl KeySize {
    /// Length of the key in bytes.
    pub const fn len(self) -> usize {
        match self {
            KeySize::Bits128 => 16,
            KeySize::Bits192 => 24,
            KeySize::Bits256 => 32,
        }
    }

    /// Number of 32-bit words in the key, the length of the `L` array.
    pub const fn words(self) -> usize {
        self.len() / WORD_BYTES
    }
}

impl TryFrom<usize> for KeySize {
    type Error = usize;

    fn try_from(len: usize) -> Result<Self, Self::Error> {
        match len {
            16 => Ok(KeySize::Bits128),
            24 => Ok(KeySize::Bits192),
            32 => Ok(KeySize::Bits256),
            _ => Err(len),
        }
    }
}

/// The expanded key, `S[0..44]`.
///
/// `S[0]` and `S[1]` whiten `B` and `D` on input, `S[2r]` and `S[2r + 1]` are used by round
/// `r` and `S[42]`, `S[43]` whiten `A` and `C` on output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundKeys([u32; ROUND_KEY_WORDS]);

impl RoundKeys {
    /// Returns all the round key words.
    pub fn as_words(&self) -> &[u32; ROUND_KEY_WORDS] {
        &self.0
    }

    /// Input whitening words `S[0]`, `S[1]`.
    #[inline]
    pub(crate) fn pre_whitening(&self) -> [u32; 2] {
        [self.0[0], self.0[1]]
    }

    /// Output whitening words `S[42]`, `S[43]`.
    #[inline]
    pub(crate) fn post_whitening(&self) -> [u32; 2] {
        [self.0[ROUND_KEY_WORDS - 2], self.0[ROUND_KEY_WORDS - 1]]
    }

    /// Per round key pairs `[S[2r], S[2r + 1]]` for `r` in `1..=ROUNDS`.
    #[inline]
    pub(crate) fn rounds(&self) -> std::slice::ChunksExact<'_, u32> {
        self.0[2..ROUND_KEY_WORDS - 2].chunks_exact(2)
    }
}

/// Expands a key whose length has already been validated as `size`.
pub(crate) fn expand_key(key: &[u8], size: KeySize) -> RoundKeys {
    debug_assert_eq!(key.len(), size.len());

    let (s_arr, l_arr) = init_sl_arrays(key);
    RoundKeys(mix_sl_arrays(s_arr, l_arr))
}

fn init_sl_arrays(key: &[u8]) -> ([u32; ROUND_KEY_WORDS], Box<[u32]>) {
    let l = key.chunks_exact(WORD_BYTES).map(load_word).collect();

    let mut s = [0u32; ROUND_KEY_WORDS];
    let magic = std::iter::successors(Some(P32), |x| Some(x.wrapping_add(Q32)));
    s.iter_mut().zip(magic).for_each(|(si, m)| *si = m);

    (s, l)
}

fn mix_sl_arrays(
    mut s_arr: [u32; ROUND_KEY_WORDS],
    mut l_arr: Box<[u32]>,
) -> [u32; ROUND_KEY_WORDS] {
    let total_count = 3 * max(s_arr.len(), l_arr.len());

    let s_indices = (0..s_arr.len()).cycle();
    let l_indices = (0..l_arr.len()).cycle();

    let mut a = 0u32;
    let mut b = 0u32;
    for (i, j) in s_indices.zip(l_indices).take(total_count) {
        // A = S[i] = (S[i] + A + B) <<< 3
        a = rotl(s_arr[i].wrapping_add(a).wrapping_add(b), 3);
        s_arr[i] = a;
        // B = L[j] = (L[j] + A + B) <<< (A + B)
        let ab = a.wrapping_add(b);
        b = rotl(l_arr[j].wrapping_add(ab), ab);
        l_arr[j] = b;
    }

    s_arr
}
