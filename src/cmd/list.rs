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

use perkroll_core::Catalog;
use perkroll_core::error::Fallible;
use perkroll_core::error::fail;

/// Render the catalog grouped by type, in catalog order.
pub fn render_catalog(catalog: &Catalog, perk_type: Option<&str>) -> Fallible<String> {
    let types: Vec<&str> = match perk_type {
        Some(t) => {
            if catalog.of_type(t).next().is_none() {
                return fail(format!("No perks available for type {t}"));
            }
            vec![t]
        }
        None => catalog.types(),
    };
    let mut out = String::new();
    for t in types {
        out.push_str(&format!("{t}:\n"));
        for perk in catalog.of_type(t) {
            out.push_str(&format!("  {}\n", perk.name()));
        }
    }
    Ok(out)
}

pub fn list_catalog(catalog: Catalog, perk_type: Option<String>) -> Fallible<()> {
    print!("{}", render_catalog(&catalog, perk_type.as_deref())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use perkroll_core::Perk;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Perk::new("A", "gun"),
            Perk::new("C", "grenade"),
            Perk::new("B", "gun"),
        ])
    }

    #[test]
    fn test_grouped() -> Fallible<()> {
        let out = render_catalog(&catalog(), None)?;
        assert_eq!(out, "gun:\n  A\n  B\ngrenade:\n  C\n");
        Ok(())
    }

    #[test]
    fn test_single_type() -> Fallible<()> {
        let out = render_catalog(&catalog(), Some("grenade"))?;
        assert_eq!(out, "grenade:\n  C\n");
        assert!(render_catalog(&catalog(), Some("laser")).is_err());
        Ok(())
    }
}
