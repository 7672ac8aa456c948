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
use perkroll_core::Perk;
use perkroll_core::Session;
use perkroll_core::error::Fallible;
use perkroll_core::error::fail;

use crate::cmd::OutputFormat;
use crate::cmd::render_perks;

pub struct DrawConfig {
    pub count: usize,
    pub seed: Option<String>,
    /// Rounds after the first continue from the seeded generator without
    /// reshuffling, skipping perks already drawn.
    pub rounds: usize,
    pub format: OutputFormat,
}

pub fn draw_rounds(catalog: Catalog, config: &DrawConfig) -> Fallible<Vec<Vec<Perk>>> {
    let mut session = Session::new();
    session.initialize(catalog);
    let mut rounds = Vec::with_capacity(config.rounds);
    for round in 0..config.rounds {
        let seed = if round == 0 {
            config.seed.as_deref()
        } else {
            None
        };
        let perks = session.random_perks(config.count, seed);
        if let Some(error) = session.error() {
            return fail(error);
        }
        log::debug!(
            "Round {}: {} perks left unused",
            round + 1,
            session.available_count()
        );
        rounds.push(perks);
    }
    Ok(rounds)
}

/// Render drawn rounds. JSON output is always an array of rounds, even for a
/// single round.
pub fn render_rounds(rounds: &[Vec<Perk>], format: OutputFormat) -> Fallible<String> {
    match format {
        OutputFormat::Text => {
            let mut blocks = Vec::with_capacity(rounds.len());
            for (i, perks) in rounds.iter().enumerate() {
                let body = render_perks(perks, format)?;
                if rounds.len() > 1 {
                    blocks.push(format!("Round {}:\n{body}", i + 1));
                } else {
                    blocks.push(body);
                }
            }
            Ok(blocks.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rounds)?),
    }
}

pub fn draw(catalog: Catalog, config: DrawConfig) -> Fallible<()> {
    let rounds = draw_rounds(catalog, &config)?;
    println!("{}", render_rounds(&rounds, config.format)?);
    Ok(())
}
