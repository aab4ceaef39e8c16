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

//! Menu context
//!
//! [`MenuContext`] owns the single live [`MenuHandle`] and the output
//! surface, and forwards lifecycle events to the active driver. Every
//! dispatch tolerates a missing handle: before `init_menu` and after `free`
//! all calls are no-ops.

use crate::core::cbs::{CallbackBinder, MenuAction};
use crate::core::config::MenuConfig;
use crate::core::driver::{DriverRegistry, MenuDriver};
use crate::core::error::{MenuError, Result};
use crate::core::handle::MenuHandle;
use crate::frontend::video::VideoSurface;
use std::sync::Arc;

/// Menu subsystem context
///
/// # Example
///
/// ```
/// use menudrv::core::config::MenuConfig;
/// use menudrv::frontend::{MenuContext, TextSurface};
///
/// let mut ctx = MenuContext::new();
/// ctx.frame(); // no menu yet: no-op
///
/// ctx.init_menu(&MenuConfig::default()).unwrap();
/// ctx.attach_video(Box::new(TextSurface::new(40, 14)));
/// ctx.frame();
/// ctx.render();
/// ctx.free();
/// assert!(!ctx.is_alive());
/// ```
pub struct MenuContext {
    /// Drivers to select from
    registry: Arc<DriverRegistry>,
    /// Binder handed to the menu at init
    binder: CallbackBinder,
    /// Live menu instance
    menu: Option<MenuHandle>,
    /// Output surface
    video: Option<Box<dyn VideoSurface>>,
}

impl MenuContext {
    /// Create a context over the built-in driver registry
    pub fn new() -> Self {
        Self::with_registry(DriverRegistry::builtin())
    }

    /// Create a context over a custom registry
    pub fn with_registry(registry: Arc<DriverRegistry>) -> Self {
        Self {
            registry,
            binder: CallbackBinder::new(),
            menu: None,
            video: None,
        }
    }

    /// Use `binder` for menus created from now on
    pub fn set_binder(&mut self, binder: CallbackBinder) {
        self.binder = binder;
    }

    pub fn registry(&self) -> &Arc<DriverRegistry> {
        &self.registry
    }

    /// Whether a menu instance exists
    pub fn is_alive(&self) -> bool {
        self.menu.is_some()
    }

    pub fn menu(&self) -> Option<&MenuHandle> {
        self.menu.as_ref()
    }

    pub fn menu_mut(&mut self) -> Option<&mut MenuHandle> {
        self.menu.as_mut()
    }

    /// Attach the output surface, returning the previous one
    pub fn attach_video(&mut self, video: Box<dyn VideoSurface>) -> Option<Box<dyn VideoSurface>> {
        self.video.replace(video)
    }

    pub fn detach_video(&mut self) -> Option<Box<dyn VideoSurface>> {
        self.video.take()
    }

    pub fn video(&self) -> Option<&dyn VideoSurface> {
        self.video.as_deref()
    }

    /// Pick the driver named in `config`
    pub fn find_menu_driver(&self, config: &MenuConfig) -> Result<Arc<dyn MenuDriver>> {
        self.registry.select(&config.driver)
    }

    /// Create the menu instance
    ///
    /// Does nothing if a menu already exists. Otherwise selects the driver,
    /// runs its `init` hook, builds the root list and dispatches
    /// `context_reset`.
    ///
    /// # Errors
    ///
    /// [`MenuError::RegistryExhausted`] or [`MenuError::InitFailed`]; both
    /// are fatal to the host.
    pub fn init_menu(&mut self, config: &MenuConfig) -> Result<()> {
        if self.menu.is_some() {
            return Ok(());
        }

        let driver = self.find_menu_driver(config)?;
        let userdata = driver.init().map_err(|e| {
            log::error!("Cannot initialize menu.");
            MenuError::InitFailed(format!("{}: {}", driver.ident(), e))
        })?;

        let mut menu = MenuHandle::new(driver, userdata, config.navigation_wraparound);
        menu.set_binder(self.binder.clone());
        if let Err(e) = menu.init_entries() {
            log::error!("Cannot initialize menu lists.");
            return Err(MenuError::InitFailed(e.to_string()));
        }

        log::info!("Menu initialized with driver \"{}\"", menu.ident());
        self.menu = Some(menu);
        self.context_reset();
        Ok(())
    }

    /// Run `f` against the driver and handle, or return the default
    fn dispatch<R: Default>(&mut self, f: impl FnOnce(&dyn MenuDriver, &mut MenuHandle) -> R) -> R {
        match self.menu.as_mut() {
            Some(menu) => {
                let driver = Arc::clone(menu.driver());
                f(driver.as_ref(), menu)
            }
            None => R::default(),
        }
    }

    /// Tear down the menu; the handle is dropped after the `free` hook
    pub fn free(&mut self) {
        self.dispatch(|driver, menu| driver.free(menu));
        if self.menu.take().is_some() {
            log::debug!("Menu freed");
        }
    }

    pub fn context_reset(&mut self) {
        self.dispatch(|driver, menu| driver.context_reset(menu));
    }

    pub fn frame(&mut self) {
        self.dispatch(|driver, menu| driver.frame(menu));
    }

    /// Draw the menu; skipped without an attached surface
    pub fn render(&mut self) {
        let Some(video) = self.video.as_deref_mut() else {
            return;
        };
        let Some(menu) = self.menu.as_mut() else {
            return;
        };
        let driver = Arc::clone(menu.driver());
        driver.render(menu, video);
    }

    pub fn navigation_increment(&mut self) {
        self.dispatch(|driver, menu| driver.navigation_increment(menu));
    }

    pub fn navigation_decrement(&mut self) {
        self.dispatch(|driver, menu| driver.navigation_decrement(menu));
    }

    pub fn navigation_clear(&mut self, pending_push: bool) {
        self.dispatch(|driver, menu| driver.navigation_clear(menu, pending_push));
    }

    pub fn navigation_set(&mut self, scroll: bool) {
        self.dispatch(|driver, menu| driver.navigation_set(menu, scroll));
    }

    pub fn navigation_set_last(&mut self) {
        self.dispatch(|driver, menu| driver.navigation_set_last(menu));
    }

    pub fn set_texture(&mut self) {
        self.dispatch(|driver, menu| driver.set_texture(menu));
    }

    /// Let the driver observe `action`; returns 0 without a menu
    pub fn entry_iterate(&mut self, action: MenuAction) -> i32 {
        self.dispatch(|driver, menu| driver.entry_iterate(menu, action))
    }

    /// Deliver an input action
    ///
    /// The driver sees the action first; if it succeeds, the handler bound
    /// to the selected entry runs. Returns the first negative code, else the
    /// handler's result.
    pub fn handle_action(&mut self, action: MenuAction) -> i32 {
        let ret = self.entry_iterate(action);
        if ret < 0 {
            return ret;
        }
        let Some(slot) = action.slot() else {
            return ret;
        };
        match self.menu.as_mut() {
            Some(menu) => menu.dispatch_action(slot),
            None => 0,
        }
    }
}

impl Default for MenuContext {
    fn default() -> Self {
        Self::new()
    }
}
