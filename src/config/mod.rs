// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! Store configuration
//!
//! Controls how keys are generated. Every field is optional in the JSON
//! file; missing fields take their defaults.
//!
//! # Example
//!
//! ```no_run
//! use multiselect_store::config::StoreConfig;
//! use multiselect_store::MultiSelectStore;
//! use std::path::Path;
//!
//! // {"default_prefix": "row", "on_collision": "advance"}
//! let config = StoreConfig::load(Path::new("store.json"))?;
//! let mut store: MultiSelectStore<String> = MultiSelectStore::with_config(&config);
//! let key = store.add("first".to_string());
//! assert!(key.starts_with("row_"));
//! # Ok::<(), multiselect_store::config::ConfigError>(())
//! ```

mod error;

pub use error::ConfigError;

use log::debug;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::core::keygen::CollisionPolicy;

/// Key generation settings for a [`MultiSelectStore`](crate::MultiSelectStore).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Prefix used when `add_obj_to_store` gets an empty one
    pub default_prefix: String,
    /// Placed between prefix and timestamp; no digits or `-`
    pub separator: String,
    /// Behaviour when two keys are generated in the same millisecond
    pub on_collision: CollisionPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_prefix: String::new(),
            separator: "_".to_string(),
            on_collision: CollisionPolicy::Advance,
        }
    }
}

impl StoreConfig {
    /// Reads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        debug!("Loaded store config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates config from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: Default::default(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that generated keys cannot collide across prefixes.
    ///
    /// The timestamp is a run of digits, possibly with a leading `-`, so a
    /// separator containing either would let `"1" + "0" + "5"` equal the bare
    /// key `"105"`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_separator(&self.separator) {
            return Err(ConfigError::InvalidSeparator(self.separator.clone()));
        }
        Ok(())
    }
}

/// Non-empty, with no ASCII digit and no `-`
pub(crate) fn is_valid_separator(separator: &str) -> bool {
    !separator.is_empty() && !separator.chars().any(|c| c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests;
