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

//! Menu lists
//!
//! A [`FileList`] is one screen of entries. A [`MenuList`] is the stack of
//! screens the user has navigated through; the root list is never popped.
//!
//! Each entry carries an [`EntryInfo`] describing it and, once bound, the
//! [`CallbackSet`] that handles input on it.

use crate::core::cbs::CallbackSet;
use crate::core::hash::{label_hash, labels};

/// Entry type codes
pub mod entry_types {
    /// Unclassified entry
    pub const NONE: u32 = 0;
    /// Plain selectable item
    pub const PLAIN: u32 = 1;
    /// Entry that opens a sub-list
    pub const DIRECTORY: u32 = 2;
    /// Setting row with a value in `elem0`
    pub const SETTING: u32 = 3;
    /// Non-interactive separator row
    pub const SEPARATOR: u32 = 4;
    /// Informational text row
    pub const INFO: u32 = 5;
}

/// Description of a menu entry, as seen by the callback binder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryInfo {
    /// Displayed text
    pub path: String,
    /// Internal label
    pub label: String,
    /// Type code from [`entry_types`]
    pub entry_type: u32,
    /// Position in the owning list
    pub idx: usize,
    /// First display element (e.g. setting value)
    pub elem0: String,
    /// Second display element
    pub elem1: String,
    /// Hash of `label`
    pub label_hash: u32,
    /// Hash of the owning list's label
    pub menu_label_hash: u32,
}

impl EntryInfo {
    /// Create an entry description, hashing `label`
    pub fn new(path: &str, label: &str, entry_type: u32) -> Self {
        Self {
            path: path.to_string(),
            label: label.to_string(),
            entry_type,
            label_hash: label_hash(label),
            ..Default::default()
        }
    }

    /// Set the display elements
    pub fn with_elements(mut self, elem0: &str, elem1: &str) -> Self {
        self.elem0 = elem0.to_string();
        self.elem1 = elem1.to_string();
        self
    }
}

/// One entry of a list
#[derive(Debug, Clone)]
pub struct MenuEntry {
    info: EntryInfo,
    callbacks: Option<CallbackSet>,
}

impl MenuEntry {
    pub fn info(&self) -> &EntryInfo {
        &self.info
    }

    /// Bound callbacks, `None` until the list has been bound
    pub fn callbacks(&self) -> Option<&CallbackSet> {
        self.callbacks.as_ref()
    }

    pub(crate) fn set_callbacks(&mut self, callbacks: CallbackSet) {
        self.callbacks = Some(callbacks);
    }
}

/// One screen of menu entries
#[derive(Debug, Clone)]
pub struct FileList {
    /// List label
    label: String,
    /// Hash of `label`, copied into every entry
    label_hash: u32,
    /// Selection in the parent list when this list was pushed
    directory_ptr: usize,
    /// Entries in display order
    entries: Vec<MenuEntry>,
}

impl FileList {
    /// Create an empty list labelled `label`
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            label_hash: label_hash(label),
            directory_ptr: 0,
            entries: Vec::new(),
        }
    }

    /// Build the help list shown for the entry at `selection`
    pub fn help(selection: usize, source: Option<&EntryInfo>) -> Self {
        let mut list = Self::new(labels::INFO_SCREEN);
        list.directory_ptr = selection;

        let text = match source {
            Some(entry) if !entry.elem1.is_empty() => entry.elem1.clone(),
            Some(entry) => format!("No information is available for \"{}\".", entry.path),
            None => "No information is available.".to_string(),
        };
        list.push(EntryInfo::new(&text, labels::INFO_SCREEN, entry_types::INFO));
        list
    }

    /// Append an entry; its index and owning-list hash are filled in here
    pub fn push(&mut self, mut info: EntryInfo) {
        info.idx = self.entries.len();
        info.menu_label_hash = self.label_hash;
        self.entries.push(MenuEntry {
            info,
            callbacks: None,
        });
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn label_hash(&self) -> u32 {
        self.label_hash
    }

    pub fn directory_ptr(&self) -> usize {
        self.directory_ptr
    }

    pub fn set_directory_ptr(&mut self, directory_ptr: usize) {
        self.directory_ptr = directory_ptr;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry description at `idx`
    pub fn entry(&self, idx: usize) -> Option<&EntryInfo> {
        self.entries.get(idx).map(MenuEntry::info)
    }

    /// Bound callbacks of the entry at `idx`
    pub fn callbacks(&self, idx: usize) -> Option<&CallbackSet> {
        self.entries.get(idx).and_then(MenuEntry::callbacks)
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [MenuEntry] {
        &mut self.entries
    }
}

/// Stack of lists, root first
#[derive(Debug, Clone)]
pub struct MenuList {
    stack: Vec<FileList>,
}

impl MenuList {
    /// Create a stack holding only `root`
    pub fn new(root: FileList) -> Self {
        Self { stack: vec![root] }
    }

    /// List currently on screen
    pub fn current(&self) -> &FileList {
        // The root is never popped, so the stack is never empty
        &self.stack[self.stack.len() - 1]
    }

    pub fn current_mut(&mut self) -> &mut FileList {
        let top = self.stack.len() - 1;
        &mut self.stack[top]
    }

    /// Number of lists on the stack
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Entry count of the current list
    pub fn size(&self) -> usize {
        self.current().len()
    }

    pub fn push(&mut self, list: FileList) {
        self.stack.push(list);
    }

    /// Pop the current list; the root stays
    pub fn pop(&mut self) -> Option<FileList> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }
}
