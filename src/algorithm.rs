// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! The implementaton details of the RC6 block cipher algorithm
//!
use crate::key_schedule::*;
use crate::word::*;

/// The RC6 struct represents an instance of the RC6-32/20/b block cipher.
///
/// The `RC6` struct owns the expanded round keys and provides methods for encrypting and
/// decrypting individual register sets and 16-byte blocks. It holds no mutable state, so a
/// single instance can be shared between threads.
#[derive(Clone, Debug)]
pub struct RC6 {
    round_keys: RoundKeys,
}

impl RC6 {
    /// Creates a new RC6 instance with the given key.
    ///
    /// The `key` parameter must be 16, 24 or 32 bytes long, any other length is rejected with
    /// [RC6InitError::InvalidKeySize] before the key schedule runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::{RC6, RC6InitError};
    ///
    /// let rc6 = RC6::new(b"sixteen byte key");
    /// assert!(rc6.is_ok());
    ///
    /// let rc6 = RC6::new(b"my secret key");
    /// assert!(matches!(rc6, Err(RC6InitError::InvalidKeySize(13))));
    /// ```
    pub fn new(key: &[u8]) -> Result<RC6, RC6InitError> {
        let size = KeySize::try_from(key.len()).map_err(RC6InitError::InvalidKeySize)?;

        Ok(RC6 {
            round_keys: expand_key(key, size),
        })
    }

    /// Returns the expanded key schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts the four registers `[A, B, C, D]` in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::{RC6, RC6InitError};
    ///
    /// # fn main() -> Result<(), RC6InitError> {
    /// let rc6 = RC6::new(&[0; 16])?;
    ///
    /// let mut words = [0; 4];
    /// rc6.encrypt_words(&mut words);
    ///
    /// assert_eq!(words, [0x36A5C38F, 0x78F7B156, 0x4EDF29C1, 0x1EA44898]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn encrypt_words(&self, words: &mut [u32; 4]) {
        let [mut a, mut b, mut c, mut d] = *words;
        let [s0, s1] = self.round_keys.pre_whitening();

        b = b.wrapping_add(s0);
        d = d.wrapping_add(s1);

        for pair in self.round_keys.rounds() {
            let t = quadratic(b);
            let u = quadratic(d);
            // A = ((A ^ t) <<< u) + S[2i]
            // C = ((C ^ u) <<< t) + S[2i + 1]
            a = rotl(a ^ t, u).wrapping_add(pair[0]);
            c = rotl(c ^ u, t).wrapping_add(pair[1]);
            (a, b, c, d) = (b, c, d, a);
        }

        let [s42, s43] = self.round_keys.post_whitening();
        a = a.wrapping_add(s42);
        c = c.wrapping_add(s43);

        *words = [a, b, c, d];
    }

    /// Decrypts the four registers `[A, B, C, D]` in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::{RC6, RC6InitError};
    ///
    /// # fn main() -> Result<(), RC6InitError> {
    /// let rc6 = RC6::new(&[0; 16])?;
    ///
    /// let mut words = [0x36A5C38F, 0x78F7B156, 0x4EDF29C1, 0x1EA44898];
    /// rc6.decrypt_words(&mut words);
    ///
    /// assert_eq!(words, [0; 4]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn decrypt_words(&self, words: &mut [u32; 4]) {
        let [mut a, mut b, mut c, mut d] = *words;
        let [s42, s43] = self.round_keys.post_whitening();

        c = c.wrapping_sub(s43);
        a = a.wrapping_sub(s42);

        for pair in self.round_keys.rounds().rev() {
            (a, b, c, d) = (d, a, b, c);
            let u = quadratic(d);
            let t = quadratic(b);
            // C = ((C - S[2i + 1]) >>> t) ^ u
            // A = ((A - S[2i]) >>> u) ^ t
            c = rotr(c.wrapping_sub(pair[1]), t) ^ u;
            a = rotr(a.wrapping_sub(pair[0]), u) ^ t;
        }

        let [s0, s1] = self.round_keys.pre_whitening();
        d = d.wrapping_sub(s1);
        b = b.wrapping_sub(s0);

        *words = [a, b, c, d];
    }

    /// Encrypts the 16-byte `block` in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::{RC6, RC6InitError};
    ///
    /// # fn main() -> Result<(), RC6InitError> {
    /// let rc6 = RC6::new(&[0; 16])?;
    ///
    /// let mut block = [0; 16];
    /// rc6.encrypt_block(&mut block);
    ///
    /// assert_eq!(
    ///     block,
    ///     [
    ///         0x8F, 0xC3, 0xA5, 0x36, 0x56, 0xB1, 0xF7, 0x78, 0xC1, 0x29, 0xDF, 0x4E, 0x98, 0x48,
    ///         0xA4, 0x1E,
    ///     ]
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn encrypt_block(&self, block: &mut Block) {
        let mut words = load_words(block);

        self.encrypt_words(&mut words);

        store_words(&words, block);
    }

    /// Decrypts the 16-byte `block` in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::{RC6, RC6InitError};
    ///
    /// # fn main() -> Result<(), RC6InitError> {
    /// let rc6 = RC6::new(&[0; 16])?;
    ///
    /// let mut block = [
    ///     0x8F, 0xC3, 0xA5, 0x36, 0x56, 0xB1, 0xF7, 0x78, 0xC1, 0x29, 0xDF, 0x4E, 0x98, 0x48,
    ///     0xA4, 0x1E,
    /// ];
    /// rc6.decrypt_block(&mut block);
    ///
    /// assert_eq!(block, [0; 16]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn decrypt_block(&self, block: &mut Block) {
        let mut words = load_words(block);

        self.decrypt_words(&mut words);

        store_words(&words, block);
    }
}

/// The `RC6AlgoError` enum represents the possible errors that can occur during the
/// encryption decryption through [BlockCipher].
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RC6AlgoError {
    #[error("invalid block size `{0}`; expected a `16` byte block")]
    InvalidBlockSize(usize),
}

/// The `BlockCipher` trait is the generic, object safe face of a 128-bit block cipher.
///
/// Modes of operation can be written against `dyn BlockCipher` and handed an [RC6] built
/// with [new_rc6_dyn]. Every method checks buffer lengths before writing, so a failed call
/// leaves the output untouched.
pub trait BlockCipher: Send + Sync {
    /// Size in bytes of the blocks this cipher transforms.
    fn block_size(&self) -> usize;
    /// Encrypts `src` into `dst`; both must be exactly one block long.
    fn encrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<(), RC6AlgoError>;
    /// Decrypts `src` into `dst`; both must be exactly one block long.
    fn decrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<(), RC6AlgoError>;
    /// Encrypts the given block in place.
    ///
    /// Returns a reference to the encrypted bytes on success, or an [RC6AlgoError] if
    /// the encryption failed.
    fn encrypt_in_place<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC6AlgoError>;
    /// Decrypts the given block in place.
    ///
    /// Returns a reference to the decrypted bytes on success, or an [RC6AlgoError] if
    /// the decryption failed.
    fn decrypt_in_place<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC6AlgoError>;
}

impl BlockCipher for RC6 {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<(), RC6AlgoError> {
        let mut block = *try_into_block(src)?;
        let dst = try_into_block_mut(dst)?;

        self.encrypt_block(&mut block);
        *dst = block;

        Ok(())
    }

    fn decrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<(), RC6AlgoError> {
        let mut block = *try_into_block(src)?;
        let dst = try_into_block_mut(dst)?;

        self.decrypt_block(&mut block);
        *dst = block;

        Ok(())
    }

    fn encrypt_in_place<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC6AlgoError> {
        self.encrypt_block(try_into_block_mut(bytes)?);

        Ok(bytes)
    }

    fn decrypt_in_place<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC6AlgoError> {
        self.decrypt_block(try_into_block_mut(bytes)?);

        Ok(bytes)
    }
}

fn try_into_block(bytes: &[u8]) -> Result<&Block, RC6AlgoError> {
    bytes
        .try_into()
        .map_err(|_| RC6AlgoError::InvalidBlockSize(bytes.len()))
}

fn try_into_block_mut(bytes: &mut [u8]) -> Result<&mut Block, RC6AlgoError> {
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| RC6AlgoError::InvalidBlockSize(len))
}

/// The `RC6InitError` enum represents the possible errors that can occur during the
/// [RC6] initialization
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RC6InitError {
    #[error("invalid key size: `{0}`; supported sizes are {{16, 24, 32}}")]
    InvalidKeySize(usize),
}

/// Constructs a new [RC6] instance behind the generic [BlockCipher] interface.
///
/// # Examples
///
/// ```
/// use rc6::new_rc6_dyn;
///
/// let key = b"a 24 byte secret key !!!";
/// let algo = new_rc6_dyn(key).unwrap();
/// let pt_org = *b"sixteen byte msg";
/// let mut ct = [0; 16];
/// algo.encrypt(&mut ct, &pt_org).unwrap();
/// assert_ne!(pt_org, ct);
/// let mut decrypted = [0; 16];
/// algo.decrypt(&mut decrypted, &ct).unwrap();
/// assert_eq!(pt_org, decrypted);
/// ```
pub fn new_rc6_dyn(key: &[u8]) -> Result<Box<dyn BlockCipher>, RC6InitError> {
    Ok(Box::new(RC6::new(key)?))
}
