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

use crate::error::Fallible;
use crate::types::perk::Perk;

/// The fixed, ordered list of perks the engine draws from. Loaded once by
/// the caller and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    perks: Vec<Perk>,
}

impl Catalog {
    pub fn new(perks: Vec<Perk>) -> Self {
        Self { perks }
    }

    /// Parse a JSON array of `{"name": ..., "type": ...}` records.
    pub fn from_json(text: &str) -> Fallible<Self> {
        let perks: Vec<Perk> = serde_json::from_str(text)?;
        Ok(Self { perks })
    }

    pub fn len(&self) -> usize {
        self.perks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.perks.is_empty()
    }

    pub fn perks(&self) -> &[Perk] {
        &self.perks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Perk> {
        self.perks.iter()
    }

    /// Look up a perk by name.
    pub fn get(&self, name: &str) -> Option<&Perk> {
        self.perks.iter().find(|p| p.name() == name)
    }

    /// All perks with the given type, in catalog order.
    pub fn of_type<'a>(&'a self, perk_type: &'a str) -> impl Iterator<Item = &'a Perk> + 'a {
        self.perks.iter().filter(move |p| p.perk_type() == perk_type)
    }

    /// The distinct type tags, in order of first appearance.
    pub fn types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for perk in &self.perks {
            if !types.contains(&perk.perk_type()) {
                types.push(perk.perk_type());
            }
        }
        types
    }
}

impl From<Vec<Perk>> for Catalog {
    fn from(perks: Vec<Perk>) -> Self {
        Self::new(perks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"[
        {"name": "A", "type": "gun"},
        {"name": "B", "type": "gun"},
        {"name": "C", "type": "grenade"}
    ]"#;

    #[test]
    fn test_from_json() -> Fallible<()> {
        let catalog = Catalog::from_json(JSON)?;
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.perks()[2], Perk::new("C", "grenade"));
        Ok(())
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(Catalog::from_json(r#"[{"name": "A"}]"#).is_err());
        assert!(Catalog::from_json("{}").is_err());
    }

    #[test]
    fn test_empty() -> Fallible<()> {
        let catalog = Catalog::from_json("[]")?;
        assert!(catalog.is_empty());
        assert!(catalog.types().is_empty());
        Ok(())
    }

    #[test]
    fn test_of_type_and_types() -> Fallible<()> {
        let catalog = Catalog::from_json(JSON)?;
        let guns: Vec<&str> = catalog.of_type("gun").map(|p| p.name()).collect();
        assert_eq!(guns, vec!["A", "B"]);
        assert_eq!(catalog.of_type("laser").count(), 0);
        assert_eq!(catalog.types(), vec!["gun", "grenade"]);
        Ok(())
    }

    #[test]
    fn test_get() -> Fallible<()> {
        let catalog = Catalog::from_json(JSON)?;
        assert_eq!(catalog.get("B"), Some(&Perk::new("B", "gun")));
        assert_eq!(catalog.get("Z"), None);
        Ok(())
    }
}
