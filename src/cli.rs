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

use std::env::current_dir;
use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use env_logger::Env;
use perkroll_core::error::Fallible;

use crate::cmd::OutputFormat;
use crate::cmd::draw::DrawConfig;
use crate::cmd::draw::draw;
use crate::cmd::hash::print_hash;
use crate::cmd::list::list_catalog;
use crate::cmd::reroll::reroll;
use crate::config::Config;
use crate::config::load_catalog;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Path to a configuration file. By default, `perkroll.toml` in the current directory is used if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Path to a JSON catalog. By default, the built-in catalog is used.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Print debug logs.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a set of random perks.
    Draw {
        /// How many perks to draw. Default is 4, or `count` from the configuration file.
        #[arg(long)]
        count: Option<usize>,
        /// Seed for a reproducible draw.
        #[arg(long)]
        seed: Option<String>,
        /// Number of rounds. Rounds after the first never repeat a perk until the catalog is exhausted.
        #[arg(long, default_value_t = 1)]
        rounds: usize,
        /// Which output format to use.
        #[arg(long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Draw a single replacement perk of a given type.
    Reroll {
        /// The perk type to draw.
        perk_type: String,
        /// Seed for a reproducible draw.
        #[arg(long)]
        seed: Option<String>,
        /// Perk names to avoid, typically the ones currently shown. May be repeated.
        #[arg(long)]
        exclude: Vec<String>,
        /// Which output format to use.
        #[arg(long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the catalog grouped by type.
    List {
        /// Only list perks of this type.
        #[arg(long = "type")]
        perk_type: Option<String>,
    },
    /// Print the numeric hash of a seed.
    Hash {
        seed: String,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let config = Config::load(cli.config.as_deref(), &current_dir()?)?;
    let catalog_path = cli.catalog.or_else(|| config.catalog.clone());
    match cli.command {
        Command::Draw {
            count,
            seed,
            rounds,
            format,
        } => {
            let catalog = load_catalog(catalog_path.as_deref())?;
            let draw_config = DrawConfig {
                count: count.unwrap_or(config.count()),
                seed,
                rounds,
                format,
            };
            draw(catalog, draw_config)
        }
        Command::Reroll {
            perk_type,
            seed,
            exclude,
            format,
        } => {
            let catalog = load_catalog(catalog_path.as_deref())?;
            reroll(catalog, perk_type, seed, exclude, format)
        }
        Command::List { perk_type } => {
            let catalog = load_catalog(catalog_path.as_deref())?;
            list_catalog(catalog, perk_type)
        }
        Command::Hash { seed } => print_hash(seed),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_reroll() {
        let cli = Cli::parse_from([
            "perkroll",
            "reroll",
            "arme",
            "--seed",
            "abc",
            "--exclude",
            "Sniper",
            "--exclude",
            "Pistolet",
        ]);
        match cli.command {
            Command::Reroll {
                perk_type,
                seed,
                exclude,
                format,
            } => {
                assert_eq!(perk_type, "arme");
                assert_eq!(seed.as_deref(), Some("abc"));
                assert_eq!(exclude, vec!["Sniper", "Pistolet"]);
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("expected reroll"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "perkroll",
            "draw",
            "--count",
            "3",
            "-v",
            "--catalog",
            "x.json",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.catalog, Some(PathBuf::from("x.json")));
    }
}
