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

//! perkroll-core: deterministic, seedable perk selection.
//!
//! - Seed hashing shared by both generators
//! - A linear congruential generator for bulk selection and a Mersenne
//!   Twister for single-perk regeneration
//! - The selection engine, which tracks perks already handed out

pub mod catalog;
pub mod error;
pub mod hash;
pub mod rng;
pub mod selector;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use catalog::Catalog;
pub use error::{ErrorReport, Fallible, SelectionError, fail};
pub use hash::hash_seed;
pub use rng::{Generator, MersenneTwister, SeededRandom, shuffle};
pub use selector::{Exclusions, PerkSelector};
pub use session::Session;
pub use types::perk::Perk;
