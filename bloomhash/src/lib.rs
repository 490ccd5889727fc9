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

//! # bloomhash
//!
//! Hash seeds for Bloom filters. A filter needs several independent-looking hash values per key
//! to pick its bit positions; this crate derives two 128-bit MurmurHash3 x64-128 values from a
//! single pass over the key:
//!
//! - `(h1, h2)`: the hash of the key itself.
//! - `(h3, h4)`: the hash of the key with one fixed [entropy byte](hash::ENTROPY) appended.
//!
//! ```rust
//! use bloomhash::hash::sum128_with_entropy;
//!
//! let [h1, h2, h3, h4] = sum128_with_entropy(b"hello");
//! assert_eq!((h1, h2), (0xcbd8a7b341bd9b02, 0x5b1e906a48ae1d19));
//! assert_ne!((h1, h2), (h3, h4));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod hash;
