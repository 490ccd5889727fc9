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


//! MurmurHash3 x64-128 and the dual-hash derivation used to seed Bloom filters.
//!
//! [`MurmurHash3X64128`] is the plain streaming hasher. [`sum128_with_entropy`] computes the
//! same hash over a key and, from the same pass over the key, the hash of the key followed by
//! [`ENTROPY`]:
//!
//! ```rust
//! use std::hash::Hasher;
//!
//! use bloomhash::hash::sum128_with_entropy;
//! use bloomhash::hash::MurmurHash3X64128;
//! use bloomhash::hash::ENTROPY;
//!
//! let key = b"19 Jan 2038 at 3:14:07 AM";
//!
//! let mut hasher = MurmurHash3X64128::default();
//! hasher.write(key);
//! let (h1, h2) = hasher.finish128();
//! hasher.write(&[ENTROPY]);
//! let (h3, h4) = hasher.finish128();
//!
//! assert_eq!(sum128_with_entropy(key), [h1, h2, h3, h4]);
//! ```

mod entropy;
mod murmurhash;

pub use self::entropy::sum128_with_entropy;
pub use self::entropy::sum128_with_entropy_and_seed;
pub use self::murmurhash::murmurhash3_x64_128;
pub use self::murmurhash::MurmurHash3X64128;

/// The seed used when none is given.
///
/// Filters that exchange hash seeds with other MurmurHash3 x64-128 implementations expect the
/// accumulators to start at zero, so that is the default here as well.
pub const DEFAULT_SEED: u64 = 0;

/// The byte logically appended to a key to derive the second 128-bit hash.
///
/// This is a fixed salt: changing it changes every `(h3, h4)` pair, so filters built with one
/// value can not be queried with another.
pub const ENTROPY: u8 = 1;

/// Size in bytes of one MurmurHash3 x64-128 block.
const BLOCK_LEN: usize = 16;

/// Reads an u64 from a byte slice in little-endian order.
///
/// Missing high bytes read as zero, which is exactly how MurmurHash3 lays out a partial tail word.
///
/// # Panics
///
/// Panics if `bytes.len()` is greater than 8.
fn read_u64_le(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf[..bytes.len()].copy_from_slice(bytes);
    u64::from_le_bytes(buf)
}

/// Splits a tail of at most 15 bytes into the two little-endian words `(k1, k2)`.
fn read_tail(tail: &[u8]) -> (u64, u64) {
    debug_assert!(tail.len() < BLOCK_LEN, "tail too long: {}", tail.len());
    let (lo, hi) = tail.split_at(tail.len().min(8));
    (read_u64_le(lo), read_u64_le(hi))
}
