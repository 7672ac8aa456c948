// Copyright 2026 The perkroll Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Seed hashing.

/// Hash a seed string into a non-negative 32-bit integer.
///
/// This is the classic `h * 31 + c` rolling hash over UTF-16 code units,
/// computed with 32-bit two's-complement overflow. The absolute value of the
/// signed result is returned, so `i32::MIN` maps to `2^31`.
///
/// Both generators are seeded from this value, so it must never change:
/// doing so would change which perks every existing seed produces.
pub fn hash_seed(seed: &str) -> u32 {
    let hash = seed.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs()
}
