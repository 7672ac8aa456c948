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

use serde::Deserialize;
use serde::Serialize;

/// A selectable catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Perk {
    /// Unique catalog key.
    name: String,
    /// Category tag.
    #[serde(rename = "type")]
    perk_type: String,
}

impl Perk {
    pub fn new(name: impl Into<String>, perk_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            perk_type: perk_type.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn perk_type(&self) -> &str {
        &self.perk_type
    }
}

impl Display for Perk {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} [{}]", self.name, self.perk_type)
    }
}
