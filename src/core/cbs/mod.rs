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

//! Entry callback binding
//!
//! When a list is built, every entry gets a [`CallbackSet`]: one
//! [`ActionHandler`] per [`ActionSlot`]. The [`CallbackBinder`] resolves each
//! slot through a fixed chain of lookups, most specific first:
//!
//! 1. an override keyed on the entry's label hash
//! 2. an override keyed on the entry's type code
//! 3. the slot's default handler
//!
//! A default exists for every slot, so binding a valid entry always
//! succeeds.
//!
//! # Handler contract
//!
//! Handlers return a signed result code: `0` or positive on success,
//! negative on hard failure. Missing navigation state is not a failure for
//! most handlers; they return a neutral result instead.

mod info;
mod scroll;
mod slot;
mod stack;
#[cfg(test)]
mod tests;

pub use slot::{ActionSlot, MenuAction};

use crate::core::error::{MenuError, Result};
use crate::core::handle::MenuHandle;
use crate::core::hash::{label_hash, labels};
use crate::core::list::{entry_types, EntryInfo, FileList};
use info::{action_info_default, action_info_none};
use scroll::{action_down_generic, action_left_scroll, action_right_scroll, action_up_generic};
use stack::{action_cancel_pop, action_ok_null, action_select_default, action_start_null};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Handler function signature
pub type ActionFn = fn(&mut MenuHandle, &EntryInfo) -> i32;

/// Build an [`ActionHandler`] whose ident is the function's name
#[macro_export]
macro_rules! action_handler {
    ($func:ident) => {
        $crate::core::cbs::ActionHandler::new(stringify!($func), $func)
    };
}

/// A bound handler and its diagnostic name
#[derive(Clone, Copy)]
pub struct ActionHandler {
    ident: &'static str,
    func: ActionFn,
}

impl ActionHandler {
    pub const fn new(ident: &'static str, func: ActionFn) -> Self {
        Self { ident, func }
    }

    /// Diagnostic name, for introspection only
    pub fn ident(&self) -> &'static str {
        self.ident
    }

    /// Run the handler for `entry`
    pub fn call(&self, menu: &mut MenuHandle, entry: &EntryInfo) -> i32 {
        (self.func)(menu, entry)
    }
}

impl fmt::Debug for ActionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ActionHandler").field(&self.ident).finish()
    }
}

/// Handlers bound to one entry, one per slot
#[derive(Debug, Clone, Copy)]
pub struct CallbackSet {
    handlers: [ActionHandler; ActionSlot::COUNT],
}

impl CallbackSet {
    /// Callback set holding the default handler for every slot
    pub fn defaults() -> Self {
        Self {
            handlers: ActionSlot::ALL.map(default_handler),
        }
    }

    pub fn get(&self, slot: ActionSlot) -> ActionHandler {
        self.handlers[slot.index()]
    }

    pub fn set(&mut self, slot: ActionSlot, handler: ActionHandler) {
        self.handlers[slot.index()] = handler;
    }

    /// Diagnostic name of the handler in `slot`
    pub fn ident(&self, slot: ActionSlot) -> &'static str {
        self.get(slot).ident()
    }

    /// Slot name to handler name, for dumping bindings
    pub fn idents(&self) -> BTreeMap<ActionSlot, &'static str> {
        ActionSlot::ALL
            .iter()
            .map(|&slot| (slot, self.ident(slot)))
            .collect()
    }
}

impl Default for CallbackSet {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Key kinds tried by the resolution chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OverrideKey {
    LabelHash,
    EntryType,
}

/// Lookup order, most specific first
const RESOLUTION_ORDER: [OverrideKey; 2] = [OverrideKey::LabelHash, OverrideKey::EntryType];

/// Resolves handlers for menu entries
#[derive(Debug, Clone)]
pub struct CallbackBinder {
    overrides: HashMap<(OverrideKey, ActionSlot, u32), ActionHandler>,
}

impl CallbackBinder {
    /// Binder with the built-in overrides
    ///
    /// - `info` on the info screen itself does nothing
    /// - separators ignore `ok`, `select` and `info`
    pub fn new() -> Self {
        Self::empty()
            .with_label_override(
                labels::INFO_SCREEN,
                ActionSlot::Info,
                action_handler!(action_info_none),
            )
            .with_type_override(
                entry_types::SEPARATOR,
                ActionSlot::Ok,
                action_handler!(action_ok_null),
            )
            .with_type_override(
                entry_types::SEPARATOR,
                ActionSlot::Select,
                action_handler!(action_ok_null),
            )
            .with_type_override(
                entry_types::SEPARATOR,
                ActionSlot::Info,
                action_handler!(action_info_none),
            )
    }

    /// Binder with no overrides; every slot gets its default
    pub fn empty() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// Override `slot` for entries labelled `label`
    pub fn with_label_override(self, label: &str, slot: ActionSlot, handler: ActionHandler) -> Self {
        self.with_label_hash_override(label_hash(label), slot, handler)
    }

    /// Override `slot` for entries whose label hashes to `hash`
    pub fn with_label_hash_override(
        mut self,
        hash: u32,
        slot: ActionSlot,
        handler: ActionHandler,
    ) -> Self {
        self.overrides
            .insert((OverrideKey::LabelHash, slot, hash), handler);
        self
    }

    /// Override `slot` for entries of type `entry_type`
    pub fn with_type_override(
        mut self,
        entry_type: u32,
        slot: ActionSlot,
        handler: ActionHandler,
    ) -> Self {
        self.overrides
            .insert((OverrideKey::EntryType, slot, entry_type), handler);
        self
    }

    /// Resolve the handler for one slot of `entry`
    pub fn resolve(&self, slot: ActionSlot, entry: &EntryInfo) -> ActionHandler {
        RESOLUTION_ORDER
            .iter()
            .find_map(|&key| self.lookup(key, slot, entry))
            .unwrap_or_else(|| default_handler(slot))
    }

    fn lookup(&self, key: OverrideKey, slot: ActionSlot, entry: &EntryInfo) -> Option<ActionHandler> {
        let value = match key {
            OverrideKey::LabelHash => entry.label_hash,
            OverrideKey::EntryType => entry.entry_type,
        };
        self.overrides.get(&(key, slot, value)).copied()
    }

    /// Bind every slot of `entry`
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InvalidArgument`] if `entry` is `None`.
    pub fn bind(&self, entry: Option<&EntryInfo>) -> Result<CallbackSet> {
        let entry = entry.ok_or(MenuError::InvalidArgument("menu entry"))?;

        let mut callbacks = CallbackSet::defaults();
        for slot in ActionSlot::ALL {
            callbacks.set(slot, self.resolve(slot, entry));
        }
        Ok(callbacks)
    }

    /// Bind every entry of `list`
    pub fn bind_list(&self, list: &mut FileList) -> Result<()> {
        for entry in list.entries_mut() {
            let callbacks = self.bind(Some(entry.info()))?;
            entry.set_callbacks(callbacks);
        }
        Ok(())
    }
}

impl Default for CallbackBinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generic handler for `slot`
pub fn default_handler(slot: ActionSlot) -> ActionHandler {
    match slot {
        ActionSlot::Up => action_handler!(action_up_generic),
        ActionSlot::Down => action_handler!(action_down_generic),
        ActionSlot::Left => action_handler!(action_left_scroll),
        ActionSlot::Right => action_handler!(action_right_scroll),
        ActionSlot::Ok => action_handler!(action_ok_null),
        ActionSlot::Cancel => action_handler!(action_cancel_pop),
        ActionSlot::Select => action_handler!(action_select_default),
        ActionSlot::Start => action_handler!(action_start_null),
        ActionSlot::Info => action_handler!(action_info_default),
    }
}
