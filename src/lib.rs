// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! This library provides an implementation of the RC6 block cipher algorithm
//!
//! RC6 is a symmetric-key block cipher designed by Rivest, Robshaw, Sidney and Yin as an AES
//! candidate. This crate implements the AES-candidate parameters RC6-32/20/b: 32-bit words,
//! a 128-bit block, 20 rounds and a key of 16, 24 or 32 bytes.
//!
//! The block is handled as four little-endian words `A, B, C, D`. The key is expanded once
//! into 44 round key words which are then used, read-only, by every block transform in either
//! direction. Modes of operation and padding are left to the caller, either directly on
//! [RC6] or through the object safe [BlockCipher] trait.
//!
//! ```
//! use rc6::{BlockCipher, RC6};
//!
//! let rc6 = RC6::new(&[0; 32]).unwrap();
//! let mut block = *b"sixteen byte msg";
//! rc6.encrypt_block(&mut block);
//! rc6.decrypt_in_place(&mut block).unwrap();
//! assert_eq!(&block, b"sixteen byte msg");
//! ```

mod algorithm;
mod key_schedule;
mod word;

pub use crate::algorithm::*;
pub use crate::key_schedule::{KeySize, RoundKeys, ROUNDS, ROUND_KEY_WORDS};
pub use crate::word::{Block, BLOCK_SIZE};
