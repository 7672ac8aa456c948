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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use perkroll_core::Perk;
use perkroll_core::error::Fallible;

pub mod draw;
pub mod hash;
pub mod list;
pub mod reroll;

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
pub enum OutputFormat {
    /// One perk per line.
    Text,
    /// A JSON array of `{"name", "type"}` records.
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn render_perks(perks: &[Perk], format: OutputFormat) -> Fallible<String> {
    match format {
        OutputFormat::Text => Ok(perks
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(perks)?),
    }
}
