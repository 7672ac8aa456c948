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

use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use perkroll_core::Catalog;
use perkroll_core::error::ErrorReport;
use perkroll_core::error::Fallible;
use perkroll_core::error::fail;
use serde::Deserialize;

/// The configuration file picked up from the working directory when no
/// `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "perkroll.toml";

/// Number of perks per draw when neither the command line nor the
/// configuration file says otherwise.
pub const DEFAULT_COUNT: usize = 4;

const EMBEDDED_CATALOG: &str = include_str!("../data/perks.json");

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to a JSON catalog. Relative paths are resolved against the
    /// directory containing the configuration file.
    pub catalog: Option<PathBuf>,
    /// Default number of perks per draw.
    pub count: Option<usize>,
}

impl Config {
    pub fn parse(text: &str) -> Fallible<Self> {
        toml::from_str(text)
            .map_err(|e| ErrorReport::new(format!("Failed to parse configuration: {e}")))
    }

    /// Load the configuration. An explicit path must exist; otherwise
    /// `perkroll.toml` is read if present in `dir`.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Fallible<Self> {
        let path: PathBuf = match explicit {
            Some(path) => {
                if !path.exists() {
                    return fail(format!(
                        "configuration file {} does not exist.",
                        path.display()
                    ));
                }
                path.to_path_buf()
            }
            None => {
                let path = dir.join(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    log::debug!("No configuration file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };
        log::debug!("Reading configuration from {}", path.display());
        let mut config = Self::parse(&read_to_string(&path)?)?;
        if let Some(catalog) = config.catalog.take() {
            let base = path.parent().unwrap_or(Path::new("."));
            config.catalog = Some(base.join(catalog));
        }
        Ok(config)
    }

    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_COUNT)
    }
}

/// Load the catalog from `path`, or the embedded one when no path is given.
pub fn load_catalog(path: Option<&Path>) -> Fallible<Catalog> {
    match path {
        Some(path) => {
            if !path.exists() {
                return fail(format!("catalog {} does not exist.", path.display()));
            }
            log::debug!("Loading catalog from {}", path.display());
            Catalog::from_json(&read_to_string(path)?)
        }
        None => Catalog::from_json(EMBEDDED_CATALOG),
    }
}
