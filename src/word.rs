// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Word level helpers: masked rotations, the RC6 quadratic and little-endian
//! conversion between a block and its four registers.
//!

/// Size in bytes of a single RC6 block.
pub const BLOCK_SIZE: usize = 16;

/// A single 128-bit block, four little-endian 32-bit words.
pub type Block = [u8; BLOCK_SIZE];

pub(crate) const WORD_BYTES: usize = std::mem::size_of::<u32>();

/// log2 of the word width, the fixed rotation used by `f`.
const LG_W: u32 = u32::BITS.trailing_zeros();

fn rotation_amount(x: u32) -> u32 {
    x & (u32::BITS - 1)
}

#[inline]
pub(crate) fn rotl(v: u32, x: u32) -> u32 {
    v.rotate_left(rotation_amount(x))
}

#[inline]
pub(crate) fn rotr(v: u32, x: u32) -> u32 {
    v.rotate_right(rotation_amount(x))
}

/// f(x) = (x * (2x + 1)) <<< lg w
#[inline]
pub(crate) fn quadratic(x: u32) -> u32 {
    rotl(x.wrapping_mul(x.wrapping_mul(2).wrapping_add(1)), LG_W)
}

/// Reads one little-endian word from a chunk of exactly [WORD_BYTES] bytes.
#[inline]
pub(crate) fn load_word(chunk: &[u8]) -> u32 {
    let mut bytes = [0u8; WORD_BYTES];
    bytes.copy_from_slice(chunk);
    u32::from_le_bytes(bytes)
}

/// Splits a block into the A, B, C, D registers.
#[inline]
pub(crate) fn load_words(block: &Block) -> [u32; 4] {
    let mut words = [0u32; 4];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(WORD_BYTES)) {
        *word = load_word(chunk);
    }
    words
}

/// Writes the A, B, C, D registers back into a block.
#[inline]
pub(crate) fn store_words(words: &[u32; 4], block: &mut Block) {
    for (chunk, word) in block.chunks_exact_mut(WORD_BYTES).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}
