// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
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

//! Menu configuration
//!
//! Holds the settings the menu layer reads from the host: the name of the
//! desired driver and navigation behavior. Stored as TOML.

use super::error::{MenuError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable that overrides the configured driver name
pub const DRIVER_ENV_VAR: &str = "MENUDRV_DRIVER";

/// Menu settings that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Identifier of the menu driver to select at startup
    pub driver: String,

    /// Wrap the selection around when moving past either end of a list
    pub navigation_wraparound: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            driver: default_driver().to_string(),
            navigation_wraparound: true,
        }
    }
}

/// Driver name used when no configuration is present
pub fn default_driver() -> &'static str {
    if cfg!(feature = "rgui") {
        "rgui"
    } else if cfg!(feature = "glui") {
        "glui"
    } else {
        "null"
    }
}

impl MenuConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| MenuError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| MenuError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Apply the driver override from the environment, if set
    ///
    /// Empty values are ignored.
    pub fn apply_env(&mut self) {
        if let Ok(driver) = std::env::var(DRIVER_ENV_VAR) {
            if !driver.is_empty() {
                log::debug!("Menu driver overridden by {}: {}", DRIVER_ENV_VAR, driver);
                self.driver = driver;
            }
        }
    }
}
