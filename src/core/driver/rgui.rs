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

//! RGUI menu driver
//!
//! Classic text-mode menu: a title row, a window of entries that scrolls to
//! keep the selection near the middle, and a status row. The window holds
//! at most [`RGUI_TERM_HEIGHT`] entries and shrinks to fit short surfaces.

use super::MenuDriver;
use crate::core::cbs::MenuAction;
use crate::core::error::Result;
use crate::core::handle::MenuHandle;
use crate::frontend::video::VideoSurface;
use std::any::Any;

/// Maximum number of entry rows shown at once
pub const RGUI_TERM_HEIGHT: usize = 10;

/// First entry row on screen
const RGUI_TERM_START_Y: usize = 2;

/// Driver-private state
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RguiState {
    /// Index of the first visible entry
    pub begin: usize,
    /// Entry rows drawn by the last render
    pub height: usize,
    /// Frames since init
    pub frame_count: u64,
    /// Screen needs redrawing
    pub dirty: bool,
    /// Background texture uploaded
    pub texture_set: bool,
}

/// Text-mode menu driver
#[derive(Debug, Default, Clone, Copy)]
pub struct RguiDriver;

impl RguiDriver {
    fn state(menu: &mut MenuHandle) -> Option<&mut RguiState> {
        menu.userdata_mut::<RguiState>()
    }
}

/// First visible entry for `selection` in a list of `size`, with a window
/// of `height` rows
pub fn scroll_begin(selection: usize, size: usize, height: usize) -> usize {
    let half = height / 2;
    if selection < half {
        0
    } else if selection + half < size {
        selection - half
    } else {
        size.saturating_sub(height)
    }
}

impl MenuDriver for RguiDriver {
    fn ident(&self) -> &'static str {
        "rgui"
    }

    fn init(&self) -> Result<Box<dyn Any>> {
        log::debug!("rgui: init");
        Ok(Box::new(RguiState {
            height: RGUI_TERM_HEIGHT,
            dirty: true,
            ..Default::default()
        }))
    }

    fn free(&self, menu: &mut MenuHandle) {
        if let Some(state) = Self::state(menu) {
            log::debug!("rgui: free after {} frames", state.frame_count);
        }
    }

    fn context_reset(&self, menu: &mut MenuHandle) {
        if let Some(state) = Self::state(menu) {
            state.texture_set = false;
            state.dirty = true;
        }
        self.set_texture(menu);
    }

    fn frame(&self, menu: &mut MenuHandle) {
        if let Some(state) = Self::state(menu) {
            state.frame_count += 1;
        }
    }

    fn render(&self, menu: &mut MenuHandle, video: &mut dyn VideoSurface) {
        let Some(size) = menu.list_size() else {
            return;
        };
        let (columns, rows) = video.size();
        let height = RGUI_TERM_HEIGHT.min(rows.saturating_sub(RGUI_TERM_START_Y + 1));
        let selection = menu.navigation().selection();

        let Some(state) = Self::state(menu) else {
            return;
        };
        if state.height != height {
            state.height = height;
            state.begin = scroll_begin(selection, size, height);
        }
        if height > 0 && (selection < state.begin || selection >= state.begin + height) {
            state.begin = scroll_begin(selection, size, height);
        }
        let begin = state.begin;

        let Some(list) = menu.list().map(|stack| stack.current()) else {
            return;
        };

        video.clear();

        let title = list.label().replace('_', " ").to_uppercase();
        video.draw_text(columns.saturating_sub(title.len()) / 2, 0, &title);

        for entry in list.entries().iter().skip(begin).take(height) {
            let info = entry.info();
            let y = RGUI_TERM_START_Y + info.idx - begin;
            let marker = if info.idx == selection { '>' } else { ' ' };
            video.draw_text(0, y, &format!("{} {}", marker, info.path));
            if !info.elem0.is_empty() {
                let x = columns.saturating_sub(info.elem0.chars().count() + 1);
                video.draw_text(x, y, &info.elem0);
            }
        }

        if list.is_empty() {
            video.draw_text(2, RGUI_TERM_START_Y, "No items.");
        }

        let status = format!("{} {}/{}", self.ident(), selection + 1, list.len());
        video.draw_text(0, rows.saturating_sub(1), &status);

        if let Some(state) = Self::state(menu) {
            state.dirty = false;
        }
    }

    fn navigation_increment(&self, menu: &mut MenuHandle) {
        if let Some(state) = Self::state(menu) {
            state.dirty = true;
        }
    }

    fn navigation_decrement(&self, menu: &mut MenuHandle) {
        if let Some(state) = Self::state(menu) {
            state.dirty = true;
        }
    }

    fn navigation_clear(&self, menu: &mut MenuHandle, _pending_push: bool) {
        if let Some(state) = Self::state(menu) {
            state.begin = 0;
            state.dirty = true;
        }
    }

    fn navigation_set(&self, menu: &mut MenuHandle, scroll: bool) {
        if !scroll {
            return;
        }
        let selection = menu.navigation().selection();
        let size = menu.list_size().unwrap_or(0);
        if let Some(state) = Self::state(menu) {
            state.begin = scroll_begin(selection, size, state.height);
            state.dirty = true;
        }
    }

    fn navigation_set_last(&self, menu: &mut MenuHandle) {
        self.navigation_set(menu, true);
    }

    fn set_texture(&self, menu: &mut MenuHandle) {
        if let Some(state) = Self::state(menu) {
            state.texture_set = true;
        }
    }

    fn entry_iterate(&self, menu: &mut MenuHandle, action: MenuAction) -> i32 {
        if action != MenuAction::Noop {
            if let Some(state) = Self::state(menu) {
                state.dirty = true;
            }
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_begin() {
        assert_eq!(scroll_begin(0, 30, RGUI_TERM_HEIGHT), 0);
        assert_eq!(scroll_begin(4, 30, RGUI_TERM_HEIGHT), 0);
        assert_eq!(scroll_begin(12, 30, RGUI_TERM_HEIGHT), 7);
        assert_eq!(scroll_begin(27, 30, RGUI_TERM_HEIGHT), 20);
        assert_eq!(scroll_begin(3, 4, RGUI_TERM_HEIGHT), 0);
    }

    #[test]
    fn test_scroll_begin_short_window() {
        assert_eq!(scroll_begin(6, 8, 5), 3);
        assert_eq!(scroll_begin(3, 8, 5), 1);
        assert_eq!(scroll_begin(1, 8, 5), 0);
    }
}
