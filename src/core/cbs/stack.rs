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

//! Confirm/back handlers

use super::ActionSlot;
use crate::core::handle::MenuHandle;
use crate::core::list::EntryInfo;

pub(crate) fn action_ok_null(_menu: &mut MenuHandle, _entry: &EntryInfo) -> i32 {
    0
}

pub(crate) fn action_start_null(_menu: &mut MenuHandle, _entry: &EntryInfo) -> i32 {
    0
}

/// Run the entry's `ok` handler
pub(crate) fn action_select_default(menu: &mut MenuHandle, entry: &EntryInfo) -> i32 {
    let handler = menu
        .list()
        .and_then(|list| list.current().callbacks(entry.idx))
        .map(|callbacks| callbacks.get(ActionSlot::Ok));

    match handler {
        Some(handler) => handler.call(menu, entry),
        None => 0,
    }
}

/// Return to the previous list
pub(crate) fn action_cancel_pop(menu: &mut MenuHandle, _entry: &EntryInfo) -> i32 {
    if !menu.pop_list() {
        log::debug!("Cancel on root menu ignored");
    }
    0
}
