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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

/// Failures of the selection engine. These are surfaced to the caller as-is;
/// the engine never retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// More perks were requested than the catalog holds.
    InvalidCount { requested: usize, available: usize },
    /// The catalog has no perk of the requested type, even ignoring
    /// exclusions.
    NoPerksForType(String),
    /// A random pick was attempted over zero candidates.
    EmptySourceArray,
    /// The operating system entropy source failed.
    Entropy(String),
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            SelectionError::InvalidCount {
                requested,
                available,
            } => write!(
                f,
                "Cannot select {requested} perks, only {available} perks available"
            ),
            SelectionError::NoPerksForType(perk_type) => {
                write!(f, "No perks available for type {perk_type}")
            }
            SelectionError::EmptySourceArray => {
                write!(f, "Cannot get random element from empty array")
            }
            SelectionError::Entropy(msg) => write!(f, "entropy source failed: {msg}"),
        }
    }
}

impl Error for SelectionError {}

#[derive(Debug, PartialEq)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(msg: impl Into<String>) -> Self {
        ErrorReport {
            message: msg.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for ErrorReport {
    fn from(value: std::io::Error) -> Self {
        ErrorReport {
            message: format!("I/O error: {value:#?}"),
        }
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(value: serde_json::Error) -> Self {
        ErrorReport {
            message: format!("JSON error: {value}"),
        }
    }
}

impl From<SelectionError> for ErrorReport {
    fn from(value: SelectionError) -> Self {
        ErrorReport {
            message: value.to_string(),
        }
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

impl Error for ErrorReport {}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(msg: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport {
        message: msg.into(),
    })
}
