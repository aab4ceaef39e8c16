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

//! Menu driver abstraction
//!
//! A menu driver is one concrete menu backend. Each driver describes its
//! capabilities through the [`MenuDriver`] trait: every hook has a no-op
//! default, so a backend only implements the events it cares about and
//! callers never check for missing hooks.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │              DriverRegistry               │
//! ├───────────────────────────────────────────┤
//! │  [rgui] [glui] ... [null]                 │
//! │                                           │
//! │  select(name) ─► first exact match        │
//! │               └► index 0 on mismatch      │
//! └───────────────────────────────────────────┘
//!                      │
//!                      ▼
//!             MenuHandle { driver, userdata, navigation, list }
//! ```
//!
//! Drivers are shared through `Arc` and never mutated after registration.
//! Per-instance state lives in the handle's userdata, created by
//! [`MenuDriver::init`].

#[cfg(feature = "glui")]
pub mod glui;
pub mod null;
mod registry;
#[cfg(feature = "rgui")]
pub mod rgui;
#[cfg(test)]
mod tests;

pub use null::NullDriver;
pub use registry::{DriverRegistry, Selection};

use crate::core::cbs::MenuAction;
use crate::core::error::Result;
use crate::core::handle::MenuHandle;
use crate::frontend::video::VideoSurface;
use std::any::Any;

/// Capability table of a menu backend
///
/// All hooks except [`ident`](MenuDriver::ident) are optional. The default
/// implementations do nothing, which is exactly how an unset hook behaves.
///
/// Hooks receive the live [`MenuHandle`]; backend state is reached through
/// [`MenuHandle::userdata_mut`].
///
/// # Example
///
/// ```
/// use menudrv::core::driver::MenuDriver;
/// use menudrv::core::handle::MenuHandle;
///
/// struct Counter;
///
/// impl MenuDriver for Counter {
///     fn ident(&self) -> &'static str {
///         "counter"
///     }
///
///     fn init(&self) -> menudrv::Result<Box<dyn std::any::Any>> {
///         Ok(Box::new(0u64))
///     }
///
///     fn frame(&self, menu: &mut MenuHandle) {
///         if let Some(frames) = menu.userdata_mut::<u64>() {
///             *frames += 1;
///         }
///     }
/// }
/// ```
pub trait MenuDriver: Send + Sync {
    /// Human-readable identifier, matched against the configured driver name
    fn ident(&self) -> &'static str;

    /// Create backend-private state for a new menu instance
    ///
    /// # Errors
    ///
    /// An error here is fatal to menu initialization.
    fn init(&self) -> Result<Box<dyn Any>> {
        Ok(Box::new(()))
    }

    /// Release backend resources; the handle is dropped right after
    fn free(&self, _menu: &mut MenuHandle) {}

    /// Recreate context-dependent resources (textures, fonts)
    fn context_reset(&self, _menu: &mut MenuHandle) {}

    /// Per-frame update
    fn frame(&self, _menu: &mut MenuHandle) {}

    /// Draw the current menu state onto the output surface
    fn render(&self, _menu: &mut MenuHandle, _video: &mut dyn VideoSurface) {}

    /// Selection moved down
    fn navigation_increment(&self, _menu: &mut MenuHandle) {}

    /// Selection moved up
    fn navigation_decrement(&self, _menu: &mut MenuHandle) {}

    /// Selection reset to the first entry
    fn navigation_clear(&self, _menu: &mut MenuHandle, _pending_push: bool) {}

    /// Selection set explicitly
    fn navigation_set(&self, _menu: &mut MenuHandle, _scroll: bool) {}

    /// Selection set to the last entry
    fn navigation_set_last(&self, _menu: &mut MenuHandle) {}

    /// Upload or refresh the backend's background texture
    fn set_texture(&self, _menu: &mut MenuHandle) {}

    /// Observe an input action before the entry callback runs
    ///
    /// Returns a signed result code; negative means failure.
    fn entry_iterate(&self, _menu: &mut MenuHandle, _action: MenuAction) -> i32 {
        0
    }
}
