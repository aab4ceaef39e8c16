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

//! Driver registry and selection

use super::{MenuDriver, NullDriver};
use crate::core::error::{MenuError, Result};
use std::sync::{Arc, OnceLock};

/// Separator used by [`DriverRegistry::enumerate_options`]
pub const OPTIONS_SEPARATOR: char = '|';

static BUILTIN: OnceLock<Arc<DriverRegistry>> = OnceLock::new();

/// Result of a driver selection
#[derive(Clone)]
pub struct Selection {
    /// Selected driver
    pub driver: Arc<dyn MenuDriver>,
    /// Registry index of the selected driver
    pub index: usize,
    /// True when the configured name matched nothing and index 0 was used
    pub fallback: bool,
}

/// Ordered, read-only list of menu drivers
///
/// The last entry is always the [`NullDriver`], so index-based lookups only
/// need to detect the end of the list.
pub struct DriverRegistry {
    drivers: Vec<Arc<dyn MenuDriver>>,
}

impl DriverRegistry {
    /// Build a registry from `drivers`, appending the null fallback
    ///
    /// # Example
    ///
    /// ```
    /// use menudrv::core::driver::{DriverRegistry, NullDriver};
    /// use std::sync::Arc;
    ///
    /// let registry = DriverRegistry::new(Vec::new());
    /// assert_eq!(registry.enumerate_options().as_deref(), Some("null"));
    /// ```
    pub fn new(mut drivers: Vec<Arc<dyn MenuDriver>>) -> Self {
        drivers.push(Arc::new(NullDriver));
        Self { drivers }
    }

    /// Registry with no drivers at all, not even the fallback
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            drivers: Vec::new(),
        }
    }

    /// Process-wide registry of the drivers enabled at build time
    ///
    /// Order: `rgui`, `glui` (each behind its cargo feature), then `null`.
    /// Built on first use and shared afterwards.
    pub fn builtin() -> Arc<DriverRegistry> {
        BUILTIN
            .get_or_init(|| Arc::new(Self::new(builtin_drivers())))
            .clone()
    }

    /// Number of registered drivers, including the fallback
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    /// Whether no driver is registered
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Iterate drivers in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn MenuDriver>> {
        self.drivers.iter()
    }

    /// Driver at `index`, or `None` past the end
    pub fn find_handle(&self, index: usize) -> Option<Arc<dyn MenuDriver>> {
        self.drivers.get(index).cloned()
    }

    /// Identifier of the driver at `index`, or `None` past the end
    pub fn find_ident(&self, index: usize) -> Option<&'static str> {
        self.drivers.get(index).map(|driver| driver.ident())
    }

    /// Index of the first driver whose identifier equals `name`
    pub fn find_index(&self, name: &str) -> Option<usize> {
        self.drivers.iter().position(|driver| driver.ident() == name)
    }

    /// All identifiers joined by `|`, in registry order
    ///
    /// Returns `None` if the output buffer cannot be allocated.
    pub fn enumerate_options(&self) -> Option<String> {
        let separators = self.drivers.len().saturating_sub(1);
        let len = self
            .drivers
            .iter()
            .map(|driver| driver.ident().len())
            .sum::<usize>()
            + separators;

        let mut options = String::new();
        if let Err(e) = options.try_reserve_exact(len) {
            log::error!("Failed to allocate menu driver options: {}", e);
            return None;
        }

        for (i, driver) in self.drivers.iter().enumerate() {
            if i > 0 {
                options.push(OPTIONS_SEPARATOR);
            }
            options.push_str(driver.ident());
        }

        Some(options)
    }

    /// Select the driver named `name`
    ///
    /// Falls back to the first registered driver with a warning if no
    /// identifier matches.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::RegistryExhausted`] if the registry has no driver
    /// at index 0.
    pub fn select(&self, name: &str) -> Result<Arc<dyn MenuDriver>> {
        self.select_with_report(name).map(|selection| selection.driver)
    }

    /// Like [`select`](Self::select), also reporting whether a fallback happened
    pub fn select_with_report(&self, name: &str) -> Result<Selection> {
        if let Some(index) = self.find_index(name) {
            log::debug!("Selected menu driver \"{}\" (index {})", name, index);
            return Ok(Selection {
                driver: Arc::clone(&self.drivers[index]),
                index,
                fallback: false,
            });
        }

        log::warn!("Couldn't find any menu driver named \"{}\"", name);
        log::info!("Available menu drivers are:");
        for ident in self.drivers.iter().map(|driver| driver.ident()) {
            log::info!("\t{}", ident);
        }
        log::warn!("Going to default to first menu driver...");

        let driver = self.find_handle(0).ok_or(MenuError::RegistryExhausted)?;
        Ok(Selection {
            driver,
            index: 0,
            fallback: true,
        })
    }
}

fn builtin_drivers() -> Vec<Arc<dyn MenuDriver>> {
    #[allow(unused_mut)]
    let mut drivers: Vec<Arc<dyn MenuDriver>> = Vec::new();

    #[cfg(feature = "rgui")]
    drivers.push(Arc::new(super::rgui::RguiDriver));

    #[cfg(feature = "glui")]
    drivers.push(Arc::new(super::glui::GluiDriver));

    drivers
}
