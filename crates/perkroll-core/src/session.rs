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

//! A forgiving wrapper around [`PerkSelector`] for interactive front ends.
//!
//! Failures never propagate: they are recorded as a message and an empty or
//! absent result is returned, so the display keeps whatever it showed before.

use crate::catalog::Catalog;
use crate::selector::Exclusions;
use crate::selector::PerkSelector;
use crate::types::perk::Perk;

#[derive(Default)]
pub struct Session {
    selector: Option<PerkSelector>,
    error: Option<String>,
    current_seed: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialize(&mut self, catalog: Catalog) {
        log::debug!("Initializing selector with {} perks", catalog.len());
        self.selector = Some(PerkSelector::new(catalog));
    }

    pub fn is_initialized(&self) -> bool {
        self.selector.is_some()
    }

    pub fn random_perks(&mut self, count: usize, seed: Option<&str>) -> Vec<Perk> {
        let Some(selector) = self.selector.as_mut() else {
            self.error = Some("Perk selector not initialized".to_string());
            return Vec::new();
        };
        if let Some(seed) = seed.filter(|s| !s.is_empty()) {
            self.current_seed = seed.to_string();
        }
        match selector.select_random_perks(count, seed) {
            Ok(perks) => perks,
            Err(e) => {
                log::warn!("Selection failed: {e}");
                self.error = Some(e.to_string());
                Vec::new()
            }
        }
    }

    pub fn reroll(
        &mut self,
        perk_type: &str,
        seed: Option<&str>,
        exclude: impl Into<Exclusions>,
    ) -> Option<Perk> {
        let Some(selector) = self.selector.as_mut() else {
            self.error = Some("Perk selector not initialized".to_string());
            return None;
        };
        match selector.select_single_perk_of_type(perk_type, seed, exclude) {
            Ok(perk) => Some(perk),
            Err(e) => {
                log::warn!("Regeneration failed: {e}");
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn reset(&mut self) {
        if let Some(selector) = self.selector.as_mut() {
            selector.reset_used_perks();
        }
    }

    pub fn available_count(&self) -> usize {
        self.selector
            .as_ref()
            .map_or(0, PerkSelector::available_perk_count)
    }

    pub fn current_seed(&self) -> &str {
        &self.current_seed
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Perk::new("A", "gun"),
            Perk::new("B", "gun"),
            Perk::new("C", "grenade"),
        ])
    }

    #[test]
    fn test_uninitialized() {
        let mut session = Session::new();
        assert!(!session.is_initialized());
        assert!(session.random_perks(1, None).is_empty());
        assert_eq!(session.error(), Some("Perk selector not initialized"));
        assert_eq!(session.available_count(), 0);
        assert!(session.reroll("gun", None, Exclusions::none()).is_none());
        session.reset();
    }

    #[test]
    fn test_records_errors() {
        let mut session = Session::new();
        session.initialize(catalog());
        assert!(session.random_perks(4, Some("seed1")).is_empty());
        assert_eq!(
            session.error(),
            Some("Cannot select 4 perks, only 3 perks available")
        );
        // The seed still takes effect on the failing call.
        assert_eq!(session.current_seed(), "seed1");
        assert_eq!(session.available_count(), 3);
        session.clear_error();
        assert_eq!(session.error(), None);

        assert!(session.reroll("laser", Some("seed1"), "A").is_none());
        assert_eq!(session.error(), Some("No perks available for type laser"));
    }

    #[test]
    fn test_tracks_seed() {
        let mut session = Session::new();
        session.initialize(catalog());
        let perks = session.random_perks(2, Some("seed1"));
        assert_eq!(perks.len(), 2);
        assert_eq!(session.current_seed(), "seed1");
        session.random_perks(1, None);
        assert_eq!(session.current_seed(), "seed1");
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_reset_and_count() {
        let mut session = Session::new();
        session.initialize(catalog());
        session.random_perks(2, None);
        assert_eq!(session.available_count(), 1);
        session.reset();
        assert_eq!(session.available_count(), 3);
    }

    #[test]
    fn test_reroll() {
        let mut session = Session::new();
        session.initialize(catalog());
        let perk = session.reroll("gun", Some("seed1"), "A");
        assert_eq!(perk, Some(Perk::new("B", "gun")));
    }
}
