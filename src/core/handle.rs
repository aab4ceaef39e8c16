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

//! Menu runtime handle
//!
//! The live menu instance created from the selected driver. It owns the
//! driver's private state, the navigation state and the list stack, and
//! forwards every navigation change to the driver's hooks.

use crate::core::cbs::{ActionSlot, CallbackBinder};
use crate::core::driver::MenuDriver;
use crate::core::error::{MenuError, Result};
use crate::core::hash::labels;
use crate::core::list::{EntryInfo, FileList, MenuList};
use crate::core::navigation::{NavEvent, Navigation};
use std::any::Any;
use std::sync::Arc;

/// Live menu instance
///
/// # Example
///
/// ```
/// use menudrv::core::driver::NullDriver;
/// use menudrv::core::handle::MenuHandle;
/// use menudrv::core::list::{entry_types, EntryInfo, FileList};
/// use std::sync::Arc;
///
/// let mut menu = MenuHandle::new(Arc::new(NullDriver), Box::new(()), true);
/// assert_eq!(menu.list_size(), None);
///
/// menu.init_entries().unwrap();
/// let mut list = FileList::new("settings");
/// list.push(EntryInfo::new("Video", "video", entry_types::DIRECTORY));
/// list.push(EntryInfo::new("Audio", "audio", entry_types::DIRECTORY));
/// menu.push_list(list).unwrap();
///
/// menu.navigation_increment(1);
/// assert_eq!(menu.selection(), Some(1));
/// ```
pub struct MenuHandle {
    /// Driver this instance was created from
    driver: Arc<dyn MenuDriver>,
    /// Driver-private state
    userdata: Box<dyn Any>,
    /// Selection and scroll acceleration
    navigation: Navigation,
    /// List stack, absent until `init_entries`
    list: Option<MenuList>,
    /// Binder applied to every pushed list
    binder: CallbackBinder,
}

impl MenuHandle {
    /// Create a handle for `driver` with its private state
    pub fn new(driver: Arc<dyn MenuDriver>, userdata: Box<dyn Any>, wraparound: bool) -> Self {
        Self {
            driver,
            userdata,
            navigation: Navigation::new(wraparound),
            list: None,
            binder: CallbackBinder::new(),
        }
    }

    /// Replace the binder used for lists pushed from now on
    pub fn set_binder(&mut self, binder: CallbackBinder) {
        self.binder = binder;
    }

    /// Binder applied to pushed lists
    pub fn binder(&self) -> &CallbackBinder {
        &self.binder
    }

    /// Driver this instance was created from
    pub fn driver(&self) -> &Arc<dyn MenuDriver> {
        &self.driver
    }

    /// Identifier of the active driver
    pub fn ident(&self) -> &'static str {
        self.driver.ident()
    }

    /// Driver-private state, if it has type `T`
    pub fn userdata<T: Any>(&self) -> Option<&T> {
        self.userdata.downcast_ref()
    }

    pub fn userdata_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.userdata.downcast_mut()
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// Create the list stack with an empty root list
    pub fn init_entries(&mut self) -> Result<()> {
        let mut root = FileList::new(labels::MAIN_MENU);
        self.binder.bind_list(&mut root)?;
        self.list = Some(MenuList::new(root));
        self.navigation.clear();
        Ok(())
    }

    pub fn list(&self) -> Option<&MenuList> {
        self.list.as_ref()
    }

    pub fn list_mut(&mut self) -> Option<&mut MenuList> {
        self.list.as_mut()
    }

    /// Entry count of the current list, `None` without a list stack
    pub fn list_size(&self) -> Option<usize> {
        self.list.as_ref().map(MenuList::size)
    }

    /// Selected index, `None` without a list stack
    pub fn selection(&self) -> Option<usize> {
        self.list.as_ref().map(|_| self.navigation.selection())
    }

    pub fn scroll_accel(&self) -> usize {
        self.navigation.scroll_accel()
    }

    pub fn set_scroll_accel(&mut self, scroll_accel: usize) {
        self.navigation.set_scroll_accel(scroll_accel);
    }

    /// Run `f` with the driver and this handle
    fn with_driver<R>(&mut self, f: impl FnOnce(&dyn MenuDriver, &mut MenuHandle) -> R) -> R {
        let driver = Arc::clone(&self.driver);
        f(driver.as_ref(), self)
    }

    fn notify(&mut self, event: NavEvent) {
        match event {
            NavEvent::Unchanged => {}
            NavEvent::Incremented(_) => self.with_driver(|driver, menu| {
                driver.navigation_set(menu, true);
                driver.navigation_increment(menu);
            }),
            NavEvent::Decremented(_) => self.with_driver(|driver, menu| {
                driver.navigation_set(menu, true);
                driver.navigation_decrement(menu);
            }),
            NavEvent::Cleared => self.with_driver(|driver, menu| driver.navigation_clear(menu, false)),
            NavEvent::SetLast(_) => self.with_driver(|driver, menu| driver.navigation_set_last(menu)),
        }
    }

    /// Move the selection down by `speed`
    ///
    /// No-op without a list stack or on an empty list.
    pub fn navigation_increment(&mut self, speed: usize) {
        let Some(size) = self.list_size() else {
            return;
        };
        let event = self.navigation.increment(speed, size);
        self.notify(event);
    }

    /// Move the selection up by `speed`
    pub fn navigation_decrement(&mut self, speed: usize) {
        let Some(size) = self.list_size() else {
            return;
        };
        let event = self.navigation.decrement(speed, size);
        self.notify(event);
    }

    /// Select the first entry
    pub fn navigation_clear(&mut self, pending_push: bool) {
        self.navigation.clear();
        self.with_driver(|driver, menu| driver.navigation_clear(menu, pending_push));
    }

    /// Select `index`, clamped to the current list
    pub fn navigation_set(&mut self, index: usize, scroll: bool) {
        let size = self.list_size().unwrap_or(0);
        self.navigation.set(index, size);
        self.with_driver(|driver, menu| driver.navigation_set(menu, scroll));
    }

    /// Select the last entry of the current list
    pub fn navigation_set_last(&mut self) {
        let size = self.list_size().unwrap_or(0);
        self.navigation.set_last(size);
        self.with_driver(|driver, menu| driver.navigation_set_last(menu));
    }

    /// Append `entries` to the current list and rebind it
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InvalidArgument`] without a list stack.
    pub fn append_entries(&mut self, entries: impl IntoIterator<Item = EntryInfo>) -> Result<()> {
        let stack = self
            .list
            .as_mut()
            .ok_or(MenuError::InvalidArgument("menu list"))?;
        let list = stack.current_mut();
        for entry in entries {
            list.push(entry);
        }
        self.binder.bind_list(list)
    }

    /// Bind and display `list`, remembering the current selection
    ///
    /// Without a list stack the list becomes the new root.
    pub fn push_list(&mut self, mut list: FileList) -> Result<()> {
        self.binder.bind_list(&mut list)?;

        match self.list.as_mut() {
            Some(stack) => {
                list.set_directory_ptr(self.navigation.selection());
                stack.push(list);
            }
            None => self.list = Some(MenuList::new(list)),
        }
        self.navigation_clear(true);
        Ok(())
    }

    /// Return to the previous list and restore its selection
    ///
    /// Returns `false` if only the root list is left.
    pub fn pop_list(&mut self) -> bool {
        let Some(popped) = self.list.as_mut().and_then(MenuList::pop) else {
            return false;
        };
        self.navigation_set(popped.directory_ptr(), true);
        true
    }

    /// Run the handler bound to `slot` on the selected entry
    ///
    /// Returns -1 if there is no list or no selected entry.
    pub fn dispatch_action(&mut self, slot: ActionSlot) -> i32 {
        let Some(selection) = self.selection() else {
            return -1;
        };
        let Some(list) = self.list.as_ref().map(MenuList::current) else {
            return -1;
        };
        let Some(entry) = list.entry(selection).cloned() else {
            return -1;
        };
        let handler = match list.callbacks(selection) {
            Some(callbacks) => callbacks.get(slot),
            None => self.binder.resolve(slot, &entry),
        };

        handler.call(self, &entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::driver::NullDriver;
    use crate::core::list::entry_types;

    fn handle_with_entries(count: usize, wraparound: bool) -> MenuHandle {
        let mut menu = MenuHandle::new(Arc::new(NullDriver), Box::new(()), wraparound);
        menu.init_entries().unwrap();
        let mut list = FileList::new("test");
        for i in 0..count {
            let path = format!("Entry {}", i);
            list.push(EntryInfo::new(&path, "entry", entry_types::PLAIN));
        }
        menu.push_list(list).unwrap();
        menu
    }

    #[test]
    fn test_no_list_stack() {
        let mut menu = MenuHandle::new(Arc::new(NullDriver), Box::new(()), true);
        assert_eq!(menu.selection(), None);
        assert_eq!(menu.list_size(), None);
        menu.navigation_increment(1);
        assert_eq!(menu.dispatch_action(ActionSlot::Down), -1);
    }

    #[test]
    fn test_push_binds_and_resets_selection() {
        let mut menu = handle_with_entries(4, true);
        menu.navigation_set(3, true);

        let mut sub = FileList::new("sub");
        sub.push(EntryInfo::new("Only", "only", entry_types::PLAIN));
        menu.push_list(sub).unwrap();

        assert_eq!(menu.selection(), Some(0));
        assert!(menu.list().unwrap().current().callbacks(0).is_some());

        assert!(menu.pop_list());
        assert_eq!(menu.selection(), Some(3));
    }

    #[test]
    fn test_append_entries() {
        let mut menu = MenuHandle::new(Arc::new(NullDriver), Box::new(()), true);
        let entries = vec![EntryInfo::new("Quit", "quit", entry_types::PLAIN)];
        assert!(menu.append_entries(entries.clone()).is_err());

        menu.init_entries().unwrap();
        menu.append_entries(entries).unwrap();
        assert_eq!(menu.list_size(), Some(1));
        assert!(menu.list().unwrap().current().callbacks(0).is_some());
    }

    #[test]
    fn test_pop_root_fails() {
        let mut menu = MenuHandle::new(Arc::new(NullDriver), Box::new(()), true);
        menu.init_entries().unwrap();
        assert!(!menu.pop_list());
    }

    #[test]
    fn test_userdata_downcast() {
        let mut menu = MenuHandle::new(Arc::new(NullDriver), Box::new(7u32), true);
        assert_eq!(menu.userdata::<u32>(), Some(&7));
        assert!(menu.userdata::<String>().is_none());
        *menu.userdata_mut::<u32>().unwrap() = 8;
        assert_eq!(menu.userdata::<u32>(), Some(&8));
    }
}
