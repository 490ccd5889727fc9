// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.


use std::hash::Hasher;

use byteorder::ByteOrder;
use byteorder::LE;

use super::read_tail;
use super::BLOCK_LEN;
use super::DEFAULT_SEED;

const C1: u64 = 0x87c37b91114253d5;
const C2: u64 = 0x4cf5ad432745937f;

/// The two running accumulators of MurmurHash3 x64-128.
///
/// This is a plain value: copying it checkpoints the hash, and each copy evolves on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct State {
    h1: u64,
    h2: u64,
}

impl State {
    pub(super) fn with_seed(seed: u64) -> Self {
        State { h1: seed, h2: seed }
    }

    /// Folds one full 16-byte block, already decoded as `(k1, k2)`.
    #[inline]
    pub(super) fn mix_block(&mut self, k1: u64, k2: u64) {
        // h1 ^= mix_k1(k1); h1 = ROTL64(h1, 27); h1 += h2; h1 = h1*5+0x52dce729;
        self.h1 ^= mix_k1(k1);
        self.h1 = self.h1.rotate_left(27);
        self.h1 = self.h1.wrapping_add(self.h2);
        self.h1 = self.h1.wrapping_mul(5).wrapping_add(0x52dce729);

        // h2 ^= mix_k2(k2); h2 = ROTL64(h2, 31); h2 += h1; h2 = h2*5+0x38495ab5;
        self.h2 ^= mix_k2(k2);
        self.h2 = self.h2.rotate_left(31);
        self.h2 = self.h2.wrapping_add(self.h1);
        self.h2 = self.h2.wrapping_mul(5).wrapping_add(0x38495ab5);
    }

    /// Folds a partial block of `len` bytes (`0..16`) whose words are `(k1, k2)`.
    #[inline]
    pub(super) fn mix_tail(&mut self, k1: u64, k2: u64, len: usize) {
        debug_assert!(len < BLOCK_LEN, "partial block too long: {len}");
        if len > 8 {
            self.h2 ^= mix_k2(k2);
        }
        if len > 0 {
            self.h1 ^= mix_k1(k1);
        }
    }

    /// Applies the length mixing and the avalanche step, returning the 128-bit hash.
    pub(super) fn finalize(mut self, total: u64) -> (u64, u64) {
        self.h1 ^= total;
        self.h2 ^= total;
        self.h1 = self.h1.wrapping_add(self.h2);
        self.h2 = self.h2.wrapping_add(self.h1);
        self.h1 = fmix64(self.h1);
        self.h2 = fmix64(self.h2);
        self.h1 = self.h1.wrapping_add(self.h2);
        self.h2 = self.h2.wrapping_add(self.h1);
        (self.h1, self.h2)
    }
}

/// The MurmurHash3 is a fast, non-cryptographic, 128-bit hash function that has
/// excellent avalanche and 2-way bit independence properties.
///
/// [`finish128`](Self::finish128) does not consume the hasher: more bytes may be written
/// afterwards, and the next `finish128` covers everything written so far. Cloning forks the
/// stream.
#[derive(Debug, Clone)]
pub struct MurmurHash3X64128 {
    state: State,
    total: u64,
    buf: [u8; BLOCK_LEN],
    buf_len: usize,
}

impl MurmurHash3X64128 {
    /// Creates a hasher whose accumulators both start at `seed`.
    pub fn with_seed(seed: u64) -> Self {
        MurmurHash3X64128 {
            state: State::with_seed(seed),
            total: 0,
            buf: [0; BLOCK_LEN],
            buf_len: 0,
        }
    }

    /// Returns the 128-bit hash of all bytes written so far as `(h1, h2)`.
    pub fn finish128(&self) -> (u64, u64) {
        let rem = &self.buf[..self.buf_len];
        let (k1, k2) = read_tail(rem);

        let mut state = self.state;
        state.mix_tail(k1, k2, rem.len());
        state.finalize(self.total + rem.len() as u64)
    }

    #[inline]
    fn update(&mut self, block: &[u8]) {
        let k1 = LE::read_u64(&block[0..8]);
        let k2 = LE::read_u64(&block[8..16]);
        self.state.mix_block(k1, k2);
        // accumulate total length
        self.total += BLOCK_LEN as u64;
    }
}

impl Default for MurmurHash3X64128 {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl Hasher for MurmurHash3X64128 {
    fn finish(&self) -> u64 {
        self.finish128().0
    }

    fn write(&mut self, mut bytes: &[u8]) {
        if self.buf_len + bytes.len() < BLOCK_LEN {
            self.buf[self.buf_len..self.buf_len + bytes.len()].copy_from_slice(bytes);
            self.buf_len += bytes.len();
            return;
        }

        if self.buf_len != 0 {
            let wanted = BLOCK_LEN - self.buf_len;
            self.buf[self.buf_len..].copy_from_slice(&bytes[..wanted]);
            let block = self.buf;
            self.update(&block);

            bytes = &bytes[wanted..];
            self.buf_len = 0;
        }

        let mut blocks = bytes.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            self.update(block);
        }

        // remain bytes
        let rem = blocks.remainder();
        self.buf[..rem.len()].copy_from_slice(rem);
        self.buf_len = rem.len();
    }
}

/// Computes the MurmurHash3 x64-128 hash of `key` in one call.
///
/// # Examples
///
/// ```
/// # use bloomhash::hash::murmurhash3_x64_128;
/// let (h1, h2) = murmurhash3_x64_128(b"hello, world", 0);
/// assert_eq!(h1, 0x342fac623a5ebc8e);
/// assert_eq!(h2, 0x4cdcbc079642414d);
/// ```
pub fn murmurhash3_x64_128(key: &[u8], seed: u64) -> (u64, u64) {
    let mut hasher = MurmurHash3X64128::with_seed(seed);
    hasher.write(key);
    hasher.finish128()
}

// k1 *= c1; k1 = ROTL64(k1, 31); k1 *= c2;
#[inline]
fn mix_k1(k1: u64) -> u64 {
    k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2)
}

// k2 *= c2; k2 = ROTL64(k2, 33); k2 *= c1;
#[inline]
fn mix_k2(k2: u64) -> u64 {
    k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1)
}

/// Finalization mix: force all bits of a hash block to avalanche.
#[inline]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51afd7ed558ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ceb9fe1a85ec53);
    k ^ (k >> 33)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder() {
        // remainder > 8
        let key = "The quick brown fox jumps over the lazy dog";
        let (h1, h2) = murmurhash3_x64_128(key.as_bytes(), 0);
        assert_eq!(h1, 0xe34bbc7bbc071b6c);
        assert_eq!(h2, 0x7a433ca9c49a9347);

        // change one bit
        let key = "The quick brown fox jumps over the lazy eog";
        let (h1, h2) = murmurhash3_x64_128(key.as_bytes(), 0);
        assert_eq!(h1, 0x362108102c62d1c9);
        assert_eq!(h2, 0x3285cd100292b305);

        // test a remainder < 8
        let key = "The quick brown fox jumps over the lazy dogdogdog";
        let (h1, h2) = murmurhash3_x64_128(key.as_bytes(), 0);
        assert_eq!(h1, 0x9c8205300e612fc4);
        assert_eq!(h2, 0xcbc0af6136aa3df9);

        // test a remainder = 8
        let key = "The quick brown fox jumps over the lazy1";
        let (h1, h2) = murmurhash3_x64_128(key.as_bytes(), 0);
        assert_eq!(h1, 0xe3301a827e5cdfe3);
        assert_eq!(h2, 0xbdbf05f8da0f0392);

        // test a remainder = 0
        let key = "The quick brown fox jumps over t";
        let (h1, h2) = murmurhash3_x64_128(key.as_bytes(), 0);
        assert_eq!(h1, 0xdf6af91bb29bdacf);
        assert_eq!(h2, 0x91a341c58df1f3a6);
    }

    #[test]
    fn test_seed() {
        let (h1, h2) = murmurhash3_x64_128(b"hello", 9001);
        assert_eq!(h1, 0x21b77bd4a835c1aa);
        assert_eq!(h2, 0xc3001500fe032ef2);
    }

    #[test]
    fn test_chunked_writes() {
        let key = b"The quick brown fox jumps over the lazy dog.";
        let expected = murmurhash3_x64_128(key, 0);
        for split in 0..=key.len() {
            let mut hasher = MurmurHash3X64128::default();
            let (a, b) = key.split_at(split);
            hasher.write(a);
            hasher.write(b);
            assert_eq!(hasher.finish128(), expected, "split at {split}");
        }
    }

    #[test]
    fn test_finish_does_not_consume() {
        let mut hasher = MurmurHash3X64128::default();
        hasher.write(b"hello");
        assert_eq!(hasher.finish128(), hasher.finish128());
        assert_eq!(hasher.finish(), 0xcbd8a7b341bd9b02);

        let mut fork = hasher.clone();
        fork.write(b", world");
        assert_eq!(fork.finish128(), murmurhash3_x64_128(b"hello, world", 0));
        assert_eq!(hasher.finish128(), murmurhash3_x64_128(b"hello", 0));
    }

    #[test]
    fn test_fmix64() {
        assert_eq!(fmix64(0), 0);
        assert_ne!(fmix64(1), 1);
    }
}
