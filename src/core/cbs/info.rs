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

//! Info handlers

use crate::core::handle::MenuHandle;
use crate::core::list::{EntryInfo, FileList};

/// Push the help screen for the selected entry
pub(crate) fn action_info_default(menu: &mut MenuHandle, _entry: &EntryInfo) -> i32 {
    let Some(selection) = menu.selection() else {
        return 0;
    };

    let source = menu
        .list()
        .and_then(|list| list.current().entry(selection))
        .cloned();

    match menu.push_list(FileList::help(selection, source.as_ref())) {
        Ok(()) => 0,
        Err(e) => {
            log::warn!("Failed to push info screen: {}", e);
            -1
        }
    }
}

/// Info is unavailable for this entry
pub(crate) fn action_info_none(_menu: &mut MenuHandle, _entry: &EntryInfo) -> i32 {
    0
}
