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

//! Deterministic pseudo-random number generators.
//!
//! Two algorithms are kept on purpose: bulk selection uses a linear
//! congruential generator keyed by the seed string, while single-perk
//! regeneration uses a Mersenne Twister keyed by the hashed seed. Each call
//! path must reproduce its exact output sequence for a given seed.

mod lcg;
mod twister;

pub use lcg::SeededRandom;
pub use twister::MersenneTwister;

/// A source of uniformly distributed floats in `[0, 1)`.
pub trait Generator {
    fn next_float(&mut self) -> f64;

    /// Generate an integer in `[min, max)`.
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        (self.next_float() * (max - min) as f64 + min as f64).floor() as i64
    }

    /// Generate an index in `[0, len)`.
    fn next_index(&mut self, len: usize) -> usize {
        (self.next_float() * len as f64).floor() as usize
    }
}

/// Fisher-Yates shuffle. Walks from the last element down to index 1,
/// swapping each with a uniformly drawn index at or before it.
pub fn shuffle<T, G: Generator + ?Sized>(v: Vec<T>, rng: &mut G) -> Vec<T> {
    let mut v = v;
    for i in (1..v.len()).rev() {
        let j = rng.next_index(i + 1);
        v.swap(i, j);
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl Generator for Constant {
        fn next_float(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_next_int_bounds() {
        assert_eq!(Constant(0.0).next_int(3, 7), 3);
        assert_eq!(Constant(0.999).next_int(3, 7), 6);
        assert_eq!(Constant(0.5).next_int(-4, 4), 0);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = SeededRandom::new("permutation");
        let input: Vec<u32> = (0..50).collect();
        let mut shuffled = shuffle(input.clone(), &mut rng);
        assert_eq!(shuffled.len(), input.len());
        assert_ne!(shuffled, input);
        shuffled.sort();
        assert_eq!(shuffled, input);
    }

    #[test]
    fn test_shuffle_trivial_inputs() {
        let mut rng = SeededRandom::new("x");
        assert_eq!(shuffle(Vec::<u8>::new(), &mut rng), Vec::<u8>::new());
        assert_eq!(shuffle(vec![1], &mut rng), vec![1]);
        // Neither call consumes a draw.
        assert_eq!(rng.state(), SeededRandom::new("x").state());
    }

    #[test]
    fn test_shuffle_with_zero_draws_rotates() {
        // Always drawing index 0 moves the head to the tail at each step.
        let shuffled = shuffle(vec!['a', 'b', 'c', 'd'], &mut Constant(0.0));
        assert_eq!(shuffled, vec!['b', 'c', 'd', 'a']);
    }

    #[test]
    fn test_shuffle_accepts_trait_objects() {
        let mut twister = MersenneTwister::new(1);
        let rng: &mut dyn Generator = &mut twister;
        let mut shuffled = shuffle(vec![1, 2, 3], rng);
        shuffled.sort();
        assert_eq!(shuffled, vec![1, 2, 3]);
    }
}
