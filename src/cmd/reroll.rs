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
use perkroll_core::Exclusions;
use perkroll_core::Perk;
use perkroll_core::Session;
use perkroll_core::error::Fallible;
use perkroll_core::error::fail;

use crate::cmd::OutputFormat;

pub fn reroll_perk(
    catalog: Catalog,
    perk_type: &str,
    seed: Option<&str>,
    exclude: Vec<String>,
) -> Fallible<Perk> {
    let mut session = Session::new();
    session.initialize(catalog);
    match session.reroll(perk_type, seed, Exclusions::from(exclude)) {
        Some(perk) => Ok(perk),
        None => fail(session.error().unwrap_or("Failed to regenerate perk")),
    }
}

pub fn reroll(
    catalog: Catalog,
    perk_type: String,
    seed: Option<String>,
    exclude: Vec<String>,
    format: OutputFormat,
) -> Fallible<()> {
    let perk = reroll_perk(catalog, &perk_type, seed.as_deref(), exclude)?;
    match format {
        OutputFormat::Text => println!("{}", perk),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&perk)?),
    }
    Ok(())
}
