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

//! Directional handlers

use crate::core::handle::MenuHandle;
use crate::core::list::EntryInfo;
use crate::core::navigation::scroll_speed;

/// Move the selection down by the current scroll speed
pub(crate) fn action_down_generic(menu: &mut MenuHandle, _entry: &EntryInfo) -> i32 {
    let Some(size) = menu.list_size() else {
        return -1;
    };
    let speed = scroll_speed(menu.scroll_accel());

    if size == 0 {
        return 0;
    }

    menu.navigation_increment(speed);
    0
}

/// Move the selection up by the current scroll speed
pub(crate) fn action_up_generic(menu: &mut MenuHandle, _entry: &EntryInfo) -> i32 {
    let Some(size) = menu.list_size() else {
        return -1;
    };
    let speed = scroll_speed(menu.scroll_accel());

    if size == 0 {
        return 0;
    }

    menu.navigation_decrement(speed);
    0
}

/// Entries skipped by a left/right fast scroll
#[inline]
fn fast_scroll_speed(menu: &MenuHandle) -> usize {
    4 + 4 * scroll_speed(menu.scroll_accel())
}

/// Jump up by a page, stopping at the first entry
pub(crate) fn action_left_scroll(menu: &mut MenuHandle, _entry: &EntryInfo) -> i32 {
    let (Some(size), Some(selection)) = (menu.list_size(), menu.selection()) else {
        return 0;
    };
    if size == 0 {
        return 0;
    }

    let fast = fast_scroll_speed(menu);
    if selection > fast {
        menu.navigation_set(selection - fast, true);
    } else {
        menu.navigation_clear(false);
    }
    0
}

/// Jump down by a page, stopping at the last entry
pub(crate) fn action_right_scroll(menu: &mut MenuHandle, _entry: &EntryInfo) -> i32 {
    let (Some(size), Some(selection)) = (menu.list_size(), menu.selection()) else {
        return 0;
    };
    if size == 0 {
        return 0;
    }

    let fast = fast_scroll_speed(menu);
    if selection + fast < size {
        menu.navigation_set(selection + fast, true);
    } else {
        menu.navigation_set_last();
    }
    0
}
