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

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::error::SelectionError;
use crate::hash::hash_seed;
use crate::rng::Generator;
use crate::rng::MersenneTwister;
use crate::rng::SeededRandom;
use crate::rng::shuffle;
use crate::types::perk::Perk;

/// Names a regeneration request must avoid. Built from a single name or any
/// list of names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Exclusions(Vec<String>);

impl Exclusions {
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Exclusions {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<String> for Exclusions {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl From<Vec<String>> for Exclusions {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<&[String]> for Exclusions {
    fn from(names: &[String]) -> Self {
        Self(names.to_vec())
    }
}

impl From<Vec<&str>> for Exclusions {
    fn from(names: Vec<&str>) -> Self {
        names.as_slice().into()
    }
}

impl From<&[&str]> for Exclusions {
    fn from(names: &[&str]) -> Self {
        Self(names.iter().map(|n| n.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Exclusions {
    fn from(names: [&str; N]) -> Self {
        names.as_slice().into()
    }
}

/// Draws perks from a catalog, remembering which names have been handed out
/// since the last seed change or reset.
///
/// Not thread-safe: `used` and the generator are mutated in place, so a
/// shared engine must sit behind external mutual exclusion.
pub struct PerkSelector {
    catalog: Catalog,
    /// Names dispensed under the current seed.
    used: HashSet<String>,
    /// The last seed passed to `set_seed`.
    seed: String,
    rng: Option<SeededRandom>,
}

impl PerkSelector {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            used: HashSet::new(),
            seed: String::new(),
            rng: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_seed(&self) -> &str {
        &self.seed
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Switch to a new seed, or rewind the generator if the seed is unchanged.
    ///
    /// A new seed clears the used set and builds a fresh generator.
    pub fn set_seed(&mut self, seed: &str) {
        if self.seed != seed {
            log::debug!("Switching seed to {seed:?}");
            self.used.clear();
            self.seed = seed.to_string();
            self.rng = Some(SeededRandom::new(seed));
        } else if let Some(rng) = self.rng.as_mut() {
            log::debug!("Rewinding generator for seed {seed:?}");
            rng.reset();
        }
    }

    /// Select `count` perks.
    ///
    /// With a seed, the whole catalog is shuffled and the first `count`
    /// perks are returned; the used set is cleared and not updated. Without
    /// one, perks are drawn without replacement from those not yet used,
    /// continuing the current generator's sequence. An empty seed counts as
    /// no seed.
    pub fn select_random_perks(
        &mut self,
        count: usize,
        seed: Option<&str>,
    ) -> Result<Vec<Perk>, SelectionError> {
        let seed = seed.filter(|s| !s.is_empty());
        if let Some(seed) = seed {
            self.set_seed(seed);
        }

        if count > self.catalog.len() {
            return Err(SelectionError::InvalidCount {
                requested: count,
                available: self.catalog.len(),
            });
        }

        if seed.is_some() {
            if let Some(rng) = self.rng.as_mut() {
                self.used.clear();
                let mut shuffled = shuffle(self.catalog.perks().to_vec(), rng);
                shuffled.truncate(count);
                return Ok(shuffled);
            }
        }

        self.draw_without_replacement(count)
    }

    fn draw_without_replacement(&mut self, count: usize) -> Result<Vec<Perk>, SelectionError> {
        let mut entropy = None;
        let rng: &mut dyn Generator = match self.rng.as_mut() {
            Some(rng) => rng,
            None => entropy.insert(MersenneTwister::from_entropy()?),
        };

        let mut available: Vec<&Perk> = self
            .catalog
            .iter()
            .filter(|p| !self.used.contains(p.name()))
            .collect();
        if count > available.len() {
            log::debug!(
                "Only {} unused perks left for a draw of {count}, recycling the catalog",
                available.len()
            );
            // The leftovers stay in front of the full catalog. Draw indices
            // depend on this layout.
            self.used.clear();
            available.extend(self.catalog.iter());
        }

        let mut selected = Vec::with_capacity(count);
        while selected.len() < count {
            let index = rng.next_index(available.len());
            let perk = available[index];
            log::trace!("Drew index {index} ({})", perk.name());
            if self.used.contains(perk.name())
                && available.iter().any(|p| !self.used.contains(p.name()))
            {
                // Redraw. Only accept a repeated name once nothing else is
                // left, which happens when the catalog repeats names.
                continue;
            }
            available.remove(index);
            self.used.insert(perk.name().to_string());
            selected.push(perk.clone());
        }
        Ok(selected)
    }

    /// Pick one perk of `perk_type` that is not in `exclude`.
    ///
    /// If every perk of that type is excluded, the exclusions are ignored
    /// rather than failing. The generator is a Mersenne Twister seeded from
    /// the hashed seed, independent of the bulk selection generator.
    pub fn select_single_perk_of_type(
        &mut self,
        perk_type: &str,
        seed: Option<&str>,
        exclude: impl Into<Exclusions>,
    ) -> Result<Perk, SelectionError> {
        let mut rng = match seed.filter(|s| !s.is_empty()) {
            Some(seed) => MersenneTwister::new(hash_seed(seed)),
            None => MersenneTwister::from_entropy()?,
        };
        let exclude = exclude.into();

        let candidates: Vec<&Perk> = self
            .catalog
            .of_type(perk_type)
            .filter(|p| !exclude.contains(p.name()))
            .collect();
        let candidates = if candidates.is_empty() {
            let fallback: Vec<&Perk> = self.catalog.of_type(perk_type).collect();
            if fallback.is_empty() {
                return Err(SelectionError::NoPerksForType(perk_type.to_string()));
            }
            log::debug!("Every {perk_type} perk is excluded, ignoring exclusions");
            fallback
        } else {
            candidates
        };

        let perk = random_element(&candidates, &mut rng)?.clone();
        self.used.insert(perk.name().to_string());
        Ok(perk)
    }

    pub fn reset_used_perks(&mut self) {
        self.used.clear();
    }

    pub fn available_perk_count(&self) -> usize {
        self.catalog.len().saturating_sub(self.used.len())
    }
}

fn random_element<'a, T, G: Generator + ?Sized>(
    items: &[&'a T],
    rng: &mut G,
) -> Result<&'a T, SelectionError> {
    if items.is_empty() {
        return Err(SelectionError::EmptySourceArray);
    }
    let index = rng.next_int(0, items.len() as i64) as usize;
    Ok(items[index])
}
