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

use crate::hash::hash_seed;
use crate::rng::Generator;

const A: u32 = 1664525;
const C: u32 = 1013904223;
const M: f64 = 4294967296.0;

/// Linear congruential generator seeded from a string, with the Numerical
/// Recipes constants. Can be rewound to its initial state.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    state: u32,
    initial: u32,
}

impl SeededRandom {
    /// Initialize the RNG from a seed string.
    pub fn new(seed: &str) -> Self {
        Self::from_hash(hash_seed(seed))
    }

    pub fn from_hash(hash: u32) -> Self {
        Self {
            state: hash,
            initial: hash,
        }
    }

    /// Rewind to the state the generator was constructed with.
    pub fn reset(&mut self) {
        self.state = self.initial;
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(A).wrapping_add(C);
        self.state
    }
}

impl Generator for SeededRandom {
    fn next_float(&mut self) -> f64 {
        f64::from(self.next_u32()) / M
    }
}
