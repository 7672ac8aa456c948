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

use crate::error::SelectionError;
use crate::rng::Generator;

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908B0DF;
const UPPER_MASK: u32 = 0x80000000;
const LOWER_MASK: u32 = 0x7FFFFFFF;
const TEMPERING_B: u32 = 0x9D2C5680;
const TEMPERING_C: u32 = 0xEFC60000;
const INIT_MULTIPLIER: f64 = 1812433253.0;

/// MT19937 Mersenne Twister.
///
/// The twist and tempering steps are the standard ones. Seeding differs from
/// the reference: the recurrence `1812433253 * x + i` is evaluated in double
/// precision with `x` read as a signed 32-bit integer, then truncated to 32
/// bits. This loses low bits of the product, and is kept so that seeds
/// generated by the existing web front end keep producing the same perks.
#[derive(Clone)]
pub struct MersenneTwister {
    mt: [u32; N],
    index: usize,
}

impl MersenneTwister {
    pub fn new(seed: u32) -> Self {
        let mut mt = [0u32; N];
        mt[0] = seed;
        for i in 1..N {
            let prev = mt[i - 1];
            let x = (prev ^ (prev >> 30)) as i32;
            let v = INIT_MULTIPLIER * f64::from(x) + i as f64;
            // |v| < 2^63, so the cast is exact before wrapping to 32 bits.
            mt[i] = v as i64 as u32;
        }
        Self { mt, index: 0 }
    }

    /// Seed from the operating system's entropy source.
    pub fn from_entropy() -> Result<Self, SelectionError> {
        let mut buf = [0u8; 4];
        getrandom::getrandom(&mut buf).map_err(|e| SelectionError::Entropy(e.to_string()))?;
        Ok(Self::new(u32::from_le_bytes(buf)))
    }

    pub fn next_u32(&mut self) -> u32 {
        if self.index == 0 {
            self.twist();
        }

        let mut y = self.mt[self.index];
        y ^= y >> 11;
        y ^= (y << 7) & TEMPERING_B;
        y ^= (y << 15) & TEMPERING_C;
        y ^= y >> 18;

        self.index = (self.index + 1) % N;
        y
    }

    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.mt[i] & UPPER_MASK) | (self.mt[(i + 1) % N] & LOWER_MASK);
            let mut next = self.mt[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.mt[i] = next;
        }
    }
}

impl Generator for MersenneTwister {
    fn next_float(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4294967296.0
    }
}
