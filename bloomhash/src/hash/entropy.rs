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


use byteorder::ByteOrder;
use byteorder::LE;

use super::murmurhash::State;
use super::read_tail;
use super::BLOCK_LEN;
use super::DEFAULT_SEED;
use super::ENTROPY;

/// Computes the Bloom filter hash seeds `[h1, h2, h3, h4]` of `data` with [`DEFAULT_SEED`].
///
/// `(h1, h2)` is the MurmurHash3 x64-128 hash of `data`; `(h3, h4)` is the hash of `data`
/// followed by one [`ENTROPY`] byte. The key is scanned once and never copied.
///
/// # Examples
///
/// ```
/// # use bloomhash::hash::sum128_with_entropy;
/// let hashes = sum128_with_entropy(b"");
/// assert_eq!(hashes[..2], [0, 0]);
/// assert_eq!(hashes[2..], [0x7ace5c908374fe16, 0x778867e4430e6785]);
/// ```
pub fn sum128_with_entropy(data: &[u8]) -> [u64; 4] {
    sum128_with_entropy_and_seed(data, DEFAULT_SEED)
}

/// Same as [`sum128_with_entropy`], with both accumulators starting at `seed`.
pub fn sum128_with_entropy_and_seed(data: &[u8], seed: u64) -> [u64; 4] {
    let mut state = State::with_seed(seed);

    let mut blocks = data.chunks_exact(BLOCK_LEN);
    for block in &mut blocks {
        state.mix_block(LE::read_u64(&block[0..8]), LE::read_u64(&block[8..16]));
    }
    let tail = blocks.remainder();
    let total = data.len() as u64;

    // Both derivations continue from the same block state.
    let checkpoint = state;
    let (h1, h2) = finish_plain(checkpoint, tail, total);
    let (h3, h4) = finish_with_entropy(checkpoint, tail, total + 1);
    [h1, h2, h3, h4]
}

fn finish_plain(mut state: State, tail: &[u8], total: u64) -> (u64, u64) {
    let (k1, k2) = read_tail(tail);
    state.mix_tail(k1, k2, tail.len());
    state.finalize(total)
}

/// Finishes the hash as if [`ENTROPY`] followed `tail`.
///
/// The entropy byte lands at position `tail.len()` of the last block: in `k1` for tails shorter
/// than 8 bytes, in `k2` otherwise. A 15-byte tail becomes a complete block.
fn finish_with_entropy(mut state: State, tail: &[u8], total: u64) -> (u64, u64) {
    let (mut k1, mut k2) = read_tail(tail);
    let n = tail.len();
    let entropy = u64::from(ENTROPY) << (8 * (n % 8));

    match n {
        0..=7 => {
            k1 |= entropy;
            state.mix_tail(k1, k2, n + 1);
        }
        8..=14 => {
            k2 |= entropy;
            state.mix_tail(k1, k2, n + 1);
        }
        _ => {
            debug_assert_eq!(n, BLOCK_LEN - 1);
            k2 |= entropy;
            state.mix_block(k1, k2);
        }
    }

    state.finalize(total)
}
